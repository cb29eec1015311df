//! Account-start line detection.
//!
//! An aged-debtors report prints one line per account, anchored by a
//! six-digit account number in the first six columns. Everything else
//! (headers, footers, address and contact continuation lines, page breaks)
//! fails the anchor test and is handled elsewhere or skipped.

/// Returns true if `line` begins a new account record: exactly six ASCII
/// digits followed by a whitespace separator. A seventh digit disqualifies
/// the line, as does a bare six-digit line with nothing after it.
pub fn is_account_start(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 7 {
        return false;
    }
    bytes[..6].iter().all(u8::is_ascii_digit) && bytes[6].is_ascii_whitespace()
}

/// Split an account-start line into the six-digit account number and the
/// trimmed remainder. Returns `None` for lines failing [`is_account_start`].
pub fn split_account_line(line: &str) -> Option<(&str, &str)> {
    if !is_account_start(line) {
        return None;
    }
    Some((&line[..6], line[6..].trim()))
}
