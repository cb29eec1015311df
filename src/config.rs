//! Extraction configuration.
//!
//! The honorific set, the control-account marker set, and the contact
//! look-ahead depth are data, not code: they vary between pharmacy
//! management systems, so they can be overridden from a TOML file while
//! the defaults match the reports this tool was built against.

use serde::Deserialize;

use crate::error::{DebtscanError, Result};

/// Honorifics stripped from name segments, as whole words, case-insensitively.
const DEFAULT_HONORIFICS: &[&str] = &[
    "MR", "MRS", "MISS", "MS", "DR", "PROF", "MEV", "MNR", "ME",
];

/// Substrings (of the uppercased name) that mark a medical-aid control row.
const DEFAULT_CONTROL_MARKERS: &[&str] = &[
    "MEDAID CONTROL ACC",
    "MEDAID CONTROL",
    "MEDICAL AID CONTROL",
    "MED AID CONTROL",
];

/// How many lines below an account line are scanned for contact details.
const DEFAULT_LOOKAHEAD: usize = 3;

/// Deepest look-ahead the report layouts we have seen can justify.
pub const MAX_LOOKAHEAD: usize = 4;

/// Tunable extraction parameters.
///
/// Immutable once constructed; the extractor only reads it. A partial TOML
/// file fills in the defaults for whatever it does not mention:
///
/// ```toml
/// lookahead = 2
/// honorifics = ["MR", "MRS", "DS"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    /// Honorific tokens removed from names (matched case-insensitively).
    #[serde(default = "default_honorifics")]
    pub honorifics: Vec<String>,
    /// Name substrings identifying non-customer control accounts.
    #[serde(default = "default_control_markers")]
    pub control_markers: Vec<String>,
    /// Contact look-ahead depth in lines, 1 to [`MAX_LOOKAHEAD`].
    #[serde(default = "default_lookahead")]
    pub lookahead: usize,
}

fn default_honorifics() -> Vec<String> {
    DEFAULT_HONORIFICS.iter().map(ToString::to_string).collect()
}

fn default_control_markers() -> Vec<String> {
    DEFAULT_CONTROL_MARKERS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_lookahead() -> usize {
    DEFAULT_LOOKAHEAD
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            honorifics: default_honorifics(),
            control_markers: default_control_markers(),
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl ExtractConfig {
    /// Parse a TOML document, filling defaults for absent fields.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &str) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Replace the look-ahead depth, re-checking its bounds.
    pub fn with_lookahead(mut self, lookahead: usize) -> Result<Self> {
        self.lookahead = lookahead;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.lookahead == 0 || self.lookahead > MAX_LOOKAHEAD {
            return Err(DebtscanError::ConfigValue(format!(
                "lookahead must be between 1 and {MAX_LOOKAHEAD}, got {}",
                self.lookahead
            )));
        }
        Ok(())
    }
}
