//! Name cleaning and control-account classification.
//!
//! The name segment of an account line sits between the account number and
//! the first monetary figure, and arrives polluted: honorific prefixes,
//! stray reference numbers, comma fragments left over from amounts the
//! boundary search stepped past, and uneven spacing. Cleaning reduces it to
//! the words that actually name the account holder.

/// Clean a raw name segment: drop honorific tokens (whole-word,
/// case-insensitive), drop numeric debris, collapse whitespace.
///
/// Cleaning is idempotent; the output never contains a removable token.
pub fn clean_name(segment: &str, honorifics: &[String]) -> String {
    let parts: Vec<&str> = segment
        .split_whitespace()
        .filter(|part| !is_honorific(part, honorifics) && !is_numeric_debris(part))
        .collect();
    parts.join(" ")
}

/// Returns true if the cleaned name can stand as an account name: at least
/// one ASCII letter. All-numeric noise that slipped past the line anchor
/// (page footers, batch numbers) fails this and the candidate is discarded.
pub fn has_letter(name: &str) -> bool {
    name.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Returns true if the name marks a medical-aid control row: the uppercased,
/// trimmed name contains any of the configured markers. Substring match, so
/// decorated variants ("MEDAID CONTROL ACC - BONITAS") still classify.
pub fn is_control_account(name: &str, markers: &[String]) -> bool {
    let upper = name.trim().to_uppercase();
    markers
        .iter()
        .any(|marker| upper.contains(&marker.to_uppercase()))
}

fn is_honorific(part: &str, honorifics: &[String]) -> bool {
    honorifics.iter().any(|h| h.eq_ignore_ascii_case(part))
}

/// Numeric debris: a token with no letters that either contains a digit
/// (`123`, `1,`, `-45.00`) or starts with a point (`.00`). Punctuation that
/// legitimately appears inside names (`&`, `-`, `'`) survives on its own.
fn is_numeric_debris(part: &str) -> bool {
    if part.bytes().any(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    part.bytes().any(|b| b.is_ascii_digit()) || part.starts_with('.')
}
