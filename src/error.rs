//! Error types for debtscan.
//!
//! A document that cannot be scanned at all fails the whole extraction with
//! [`DebtscanError::Document`]. A single malformed report line never does;
//! those are skipped inside the extractor, so "no accounts found" (an empty
//! result) stays distinguishable from "could not read file".

/// All errors that can occur while reading a report and rendering records.
#[derive(Debug, thiserror::Error)]
pub enum DebtscanError {
    /// I/O error (file read, stdin read).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Document-level error (not a PDF, extraction failure, no text layer).
    #[error("{0}")]
    Document(String),

    /// Extraction configuration could not be parsed.
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),

    /// Extraction configuration parsed but holds an unusable value.
    #[error("config: {0}")]
    ConfigValue(String),

    /// Pretty-printing error (bat rendering failure).
    #[error("pretty print: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DebtscanError>;
