//! Aggregation and selection over extracted records.
//!
//! These are the figures the rest of the system consumes: the ageing totals
//! shown on the dashboard, and the 60-plus-day arrears selection that picks
//! which accounts get a payment reminder. Medical-aid control rows are
//! aggregates of other accounts, so both exclude them; counting them would
//! double amounts already present in the customer rows.

use crate::record::DebtorRecord;

/// Balance floor for the arrears selection. Chasing smaller balances costs
/// more in messaging than it recovers.
pub const DEFAULT_MIN_BALANCE: f64 = 100.0;

/// Column totals for a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sums of the seven ageing buckets, in report order (current first).
    pub bucket_totals: [f64; 7],
    /// Sum of the balance column.
    pub total_outstanding: f64,
    /// Number of customer accounts summed (control rows not counted).
    pub accounts: usize,
}

impl Summary {
    /// Columnwise totals over `records`, skipping medical-aid control rows.
    pub fn from_records(records: &[DebtorRecord]) -> Self {
        let mut bucket_totals = [0.0_f64; 7];
        let mut total_outstanding = 0.0;
        let mut accounts = 0;

        for record in records.iter().filter(|r| !r.medical_aid_control) {
            for (total, value) in bucket_totals.iter_mut().zip(record.buckets()) {
                *total += value;
            }
            total_outstanding += record.balance;
            accounts += 1;
        }

        Self {
            bucket_totals,
            total_outstanding,
            accounts,
        }
    }
}

/// Select the accounts worth following up: anything 60 days or more overdue
/// with a balance at or above `min_balance`. Medical-aid control rows are
/// never selected.
pub fn overdue_60_plus(records: &[DebtorRecord], min_balance: f64) -> Vec<&DebtorRecord> {
    records
        .iter()
        .filter(|r| {
            !r.medical_aid_control
                && r.buckets()[2..].iter().any(|&v| v > 0.0)
                && r.balance >= min_balance
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, buckets: [f64; 7], balance: f64, control: bool) -> DebtorRecord {
        DebtorRecord {
            account_number: "123456".into(),
            name: name.into(),
            current: buckets[0],
            d30: buckets[1],
            d60: buckets[2],
            d90: buckets[3],
            d120: buckets[4],
            d150: buckets[5],
            d180: buckets[6],
            balance,
            email: String::new(),
            phone: String::new(),
            medical_aid_control: control,
        }
    }

    // ── Summary ──────────────────────────────────────────────────

    #[test]
    fn summary_totals_are_columnwise_sums() {
        let records = vec![
            record("A", [100.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0], 110.0, false),
            record("B", [50.0, 20.0, 5.0, 0.0, 0.0, 0.0, 0.0], 75.0, false),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(
            summary.bucket_totals,
            [150.0, 30.0, 5.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(summary.total_outstanding, 185.0);
        assert_eq!(summary.accounts, 2);
    }

    #[test]
    fn summary_skips_control_rows() {
        let records = vec![
            record("A", [100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 100.0, false),
            record(
                "MEDAID CONTROL ACC",
                [900.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                900.0,
                true,
            ),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.total_outstanding, 100.0);
        assert_eq!(summary.accounts, 1);
    }

    #[test]
    fn summary_of_nothing() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary.accounts, 0);
        assert_eq!(summary.total_outstanding, 0.0);
    }

    // ── overdue_60_plus ──────────────────────────────────────────

    #[test]
    fn selects_overdue_accounts() {
        let records = vec![
            record("FRESH", [500.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 500.0, false),
            record("LATE", [0.0, 0.0, 150.0, 0.0, 0.0, 0.0, 0.0], 150.0, false),
        ];
        let selected = overdue_60_plus(&records, DEFAULT_MIN_BALANCE);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "LATE");
    }

    #[test]
    fn balance_floor_applies() {
        let records = vec![record(
            "SMALL",
            [0.0, 0.0, 40.0, 0.0, 0.0, 0.0, 0.0],
            40.0,
            false,
        )];
        assert!(overdue_60_plus(&records, 100.0).is_empty());
        assert_eq!(overdue_60_plus(&records, 40.0).len(), 1);
    }

    #[test]
    fn thirty_day_arrears_not_selected() {
        let records = vec![record(
            "RECENT",
            [0.0, 500.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            500.0,
            false,
        )];
        assert!(overdue_60_plus(&records, DEFAULT_MIN_BALANCE).is_empty());
    }

    #[test]
    fn control_rows_never_selected() {
        let records = vec![record(
            "MEDAID CONTROL ACC",
            [0.0, 0.0, 900.0, 0.0, 0.0, 0.0, 0.0],
            900.0,
            true,
        )];
        assert!(overdue_60_plus(&records, DEFAULT_MIN_BALANCE).is_empty());
    }

    #[test]
    fn deep_bucket_selects() {
        let records = vec![record(
            "OLD",
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 300.0],
            300.0,
            false,
        )];
        assert_eq!(overdue_60_plus(&records, DEFAULT_MIN_BALANCE).len(), 1);
    }
}
