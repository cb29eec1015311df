//! The extraction walk: ordered report lines in, debtor records out.
//!
//! A single forward pass over the line sequence. Each account-start line is
//! split into account number, name segment, and numeric tail, the contact
//! window below it is scanned, and a record is emitted. Candidates that turn
//! out to be noise (page headers that happen to start with six digits,
//! all-numeric fragments) are skipped without failing the run; only the
//! upstream document reader can fail a whole extraction.
//!
//! The walk is pure and deterministic: no I/O, no shared state, identical
//! input always yields identical output.

use crate::config::ExtractConfig;
use crate::record::DebtorRecord;
use crate::{contact, line, name, numeric};

/// Extract one [`DebtorRecord`] per account line found in `lines`.
///
/// An empty or account-free sequence yields an empty vector; that is a
/// valid outcome, not an error.
pub fn extract_records(lines: &[String], config: &ExtractConfig) -> Vec<DebtorRecord> {
    let mut records = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let Some((account_number, rest)) = line::split_account_line(raw) else {
            continue;
        };

        let Some((name_segment, tail)) = numeric::split_name_and_tail(rest) else {
            log::debug!("line {i}: account candidate with no monetary figures, skipped");
            continue;
        };

        let cleaned = name::clean_name(name_segment, &config.honorifics);
        if !name::has_letter(&cleaned) {
            log::debug!("line {i}: no usable name on account candidate, skipped");
            continue;
        }

        let [current, d30, d60, d90, d120, d150, d180, balance] = numeric::parse_tail(tail);
        let (email, phone) = contact::resolve_contacts(lines, i, config.lookahead);
        let medical_aid_control = name::is_control_account(&cleaned, &config.control_markers);

        records.push(DebtorRecord {
            account_number: account_number.to_string(),
            name: cleaned,
            current,
            d30,
            d60,
            d90,
            d120,
            d150,
            d180,
            balance,
            email,
            phone,
            medical_aid_control,
        });
    }

    records
}
