//! Monetary figure parsing.
//!
//! After the name, an account line carries eight monetary columns: the seven
//! ageing buckets (current, 30 through 180 days) and the balance. The report
//! prints them with thousands commas, drops the integer part of zero amounts
//! (`.00`), and trails a minus for credits on some layouts. Columns can also
//! be missing entirely when an account has sparse ageing history.

/// Number of monetary columns on an account line.
pub const TAIL_FIELDS: usize = 8;

/// Byte offset of the first amount-shaped token in `rest`, or `None` when
/// the line carries no monetary figure. The offset marks the boundary
/// between the name segment and the numeric tail.
pub fn find_amount_start(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if start < i && is_amount_token(&rest[start..i]) {
            return Some(start);
        }
    }
    None
}

/// Split an account line remainder into its name segment and numeric tail.
/// `None` when no amount exists on the line; such candidates carry no
/// usable name/figure boundary and are rejected upstream.
pub fn split_name_and_tail(rest: &str) -> Option<(&str, &str)> {
    let start = find_amount_start(rest)?;
    Some((rest[..start].trim(), rest[start..].trim()))
}

/// Parse the numeric tail into exactly eight figures, in report order:
/// current, d30, d60, d90, d120, d150, d180, balance.
///
/// Thousands commas are stripped. A token that still fails to parse, or a
/// tail with fewer than eight tokens, zero-fills the affected fields rather
/// than rejecting the record; sparse ageing data is normal. Tokens beyond
/// the eighth are ignored.
pub fn parse_tail(tail: &str) -> [f64; TAIL_FIELDS] {
    let mut fields = [0.0_f64; TAIL_FIELDS];
    for (slot, token) in fields.iter_mut().zip(tail.split_whitespace()) {
        *slot = parse_amount(token);
    }
    fields
}

/// Parse a single monetary token, stripping thousands commas. Unparseable
/// tokens default to zero.
pub fn parse_amount(token: &str) -> f64 {
    token.replace(',', "").parse().unwrap_or(0.0)
}

/// An amount-shaped token: optional sign (leading, or trailing on credit
/// layouts), optional thousands commas, then digits around a decimal point
/// with at least two decimals. The integer part may be absent (`.00`).
fn is_amount_token(token: &str) -> bool {
    let stripped = token.replace(',', "");
    let s = stripped.as_str();
    let s = s.strip_prefix('-').unwrap_or(s);
    let s = s.strip_suffix('-').unwrap_or(s);
    let Some((int_part, frac)) = s.split_once('.') else {
        return false;
    };
    int_part.bytes().all(|b| b.is_ascii_digit())
        && frac.len() >= 2
        && frac.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── find_amount_start / split_name_and_tail ──────────────────

    #[test]
    fn boundary_at_plain_amount() {
        let rest = "JOHN SMITH 100.00 0.00";
        assert_eq!(find_amount_start(rest), Some(11));
    }

    #[test]
    fn boundary_at_comma_grouped_amount() {
        // The whole token is the boundary, not its post-comma half.
        let (name, tail) = split_name_and_tail("JOHN SMITH 1,200.00 0.00").unwrap();
        assert_eq!(name, "JOHN SMITH");
        assert_eq!(tail, "1,200.00 0.00");
    }

    #[test]
    fn boundary_at_bare_cents() {
        let (name, tail) = split_name_and_tail("J VAN WYK .00 .00 150.00").unwrap();
        assert_eq!(name, "J VAN WYK");
        assert_eq!(tail, ".00 .00 150.00");
    }

    #[test]
    fn boundary_at_negative_amount() {
        let (name, tail) = split_name_and_tail("A NAIDOO -50.00 0.00").unwrap();
        assert_eq!(name, "A NAIDOO");
        assert_eq!(tail, "-50.00 0.00");
    }

    #[test]
    fn reference_number_is_not_boundary() {
        // A bare integer is a reference number, not a monetary column.
        let (name, tail) = split_name_and_tail("SMITH 123 100.00").unwrap();
        assert_eq!(name, "SMITH 123");
        assert_eq!(tail, "100.00");
    }

    #[test]
    fn no_amount_no_boundary() {
        assert!(split_name_and_tail("JOHN SMITH").is_none());
        assert!(split_name_and_tail("").is_none());
    }

    #[test]
    fn single_decimal_not_amount() {
        assert!(split_name_and_tail("SMITH 350.5").is_none());
    }

    // ── parse_tail ───────────────────────────────────────────────

    #[test]
    fn full_tail() {
        let fields = parse_tail("1,200.00 0.00 350.50 0 0 0 0 1550.50");
        assert_eq!(fields, [1200.00, 0.0, 350.50, 0.0, 0.0, 0.0, 0.0, 1550.50]);
    }

    #[test]
    fn short_tail_zero_fills() {
        let fields = parse_tail("100.00 50.00");
        assert_eq!(fields, [100.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_tail_all_zero() {
        assert_eq!(parse_tail(""), [0.0; TAIL_FIELDS]);
    }

    #[test]
    fn unparseable_token_zero_filled() {
        let fields = parse_tail("100.00 n/a 25.00");
        assert_eq!(fields[0], 100.0);
        assert_eq!(fields[1], 0.0);
        assert_eq!(fields[2], 25.0);
    }

    #[test]
    fn negative_credit_passes_through() {
        let fields = parse_tail("-150.00 0.00");
        assert_eq!(fields[0], -150.0);
    }

    #[test]
    fn bare_cents_parses_to_zero() {
        assert_eq!(parse_tail(".00")[0], 0.0);
    }

    #[test]
    fn extra_tokens_ignored() {
        let fields = parse_tail("1 2 3 4 5 6 7 8 9 10");
        assert_eq!(fields, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    // ── parse_amount ─────────────────────────────────────────────

    #[test]
    fn amount_comma_stripped() {
        assert_eq!(parse_amount("12,345.67"), 12345.67);
    }

    #[test]
    fn amount_garbage_is_zero() {
        assert_eq!(parse_amount("TOTAL"), 0.0);
    }
}
