//! Contact detail recovery.
//!
//! The report prints an account's email and phone on their own lines below
//! the account line, mixed in with address continuations. Recovery scans a
//! bounded window of following lines and takes the first match of each
//! shape. The window is cut short at the next account-start line so a later
//! account's details are never attributed to the current one.

use crate::line::is_account_start;

/// Scan up to `lookahead` lines below `index` for an email address and a
/// South African phone number. Either comes back empty when not found;
/// missing contact details are normal, not an error.
pub fn resolve_contacts(lines: &[String], index: usize, lookahead: usize) -> (String, String) {
    let mut email = String::new();
    let mut phone = String::new();

    for j in 1..=lookahead {
        let Some(raw) = lines.get(index + j) else {
            break;
        };
        if is_account_start(raw) {
            break;
        }
        let line = raw.trim();

        if email.is_empty() && line.to_lowercase().contains("email") {
            if let Some(found) = find_email(line) {
                email = found;
            }
        }
        if phone.is_empty() {
            if let Some(found) = find_phone(line) {
                phone = found;
            }
        }
    }

    (email, phone)
}

/// First email-shaped substring: local part, `@`, domain with an interior
/// dot. Trailing dots and hyphens are not part of the match.
fn find_email(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'@' {
            continue;
        }

        let mut start = i;
        while start > 0 && is_email_char(bytes[start - 1]) {
            start -= 1;
        }
        if start == i {
            continue; // no local part
        }

        let mut end = i + 1;
        while end < bytes.len() && is_email_char(bytes[end]) {
            end += 1;
        }
        while end > i + 1 && matches!(bytes[end - 1], b'.' | b'-') {
            end -= 1;
        }

        let domain = &line[i + 1..end];
        if !domain.starts_with('.') && domain.contains('.') {
            return Some(line[start..end].to_string());
        }
    }
    None
}

fn is_email_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

/// Phone number from a `TEL`-prefixed line. The line must begin with `tel`
/// (any case) followed by a space or colon; all whitespace is squashed
/// before matching so `082 123 4567` groupings still read as one number.
fn find_phone(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    if bytes.len() < 4 || !bytes[..3].eq_ignore_ascii_case(b"tel") {
        return None;
    }
    if bytes[3] != b' ' && bytes[3] != b':' {
        return None;
    }
    let squashed: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    find_sa_mobile(&squashed)
}

/// First South African mobile shape: `+27` or `0`, a subscriber digit in
/// 6 through 8, then eight more digits.
fn find_sa_mobile(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for i in 0..bytes.len() {
        let subscriber = if bytes[i] == b'0' {
            i + 1
        } else if bytes[i..].starts_with(b"+27") {
            i + 3
        } else {
            continue;
        };
        let rest = &bytes[subscriber..];
        if rest.len() >= 9
            && (b'6'..=b'8').contains(&rest[0])
            && rest[1..9].iter().all(u8::is_ascii_digit)
        {
            return Some(s[i..subscriber + 9].to_string());
        }
    }
    None
}
