//! The debtor record data model.

use serde::Serialize;

/// One customer (or control) account extracted from an aged-debtors report.
///
/// Immutable once emitted by the extractor. The seven ageing buckets and the
/// balance are parsed independently from the report; `balance` is the
/// document's own total and is never recomputed from the buckets here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorRecord {
    /// Six-digit account identifier, kept verbatim (leading zeros intact).
    pub account_number: String,
    /// Cleaned account holder name. Never empty; always has a letter.
    pub name: String,
    /// Amount not yet due.
    pub current: f64,
    /// 30 days overdue.
    pub d30: f64,
    /// 60 days overdue.
    pub d60: f64,
    /// 90 days overdue.
    pub d90: f64,
    /// 120 days overdue.
    pub d120: f64,
    /// 150 days overdue.
    pub d150: f64,
    /// 180 days overdue.
    pub d180: f64,
    /// Total outstanding, as printed in the report.
    pub balance: f64,
    /// Email address found near the account line, or empty.
    pub email: String,
    /// Phone number found near the account line, or empty.
    pub phone: String,
    /// True for medical-aid control rows. These are summary rows, not
    /// collectible debtors; they are emitted flagged, never dropped.
    pub medical_aid_control: bool,
}

/// Column labels for the seven ageing buckets, in report order.
pub const BUCKET_LABELS: [&str; 7] = [
    "Current", "30 Days", "60 Days", "90 Days", "120 Days", "150 Days", "180 Days",
];

impl DebtorRecord {
    /// The seven ageing figures in report order (current first).
    pub fn buckets(&self) -> [f64; 7] {
        [
            self.current,
            self.d30,
            self.d60,
            self.d90,
            self.d120,
            self.d150,
            self.d180,
        ]
    }

    /// Sum of the 60-day-and-older buckets, the figure follow-up
    /// communications are based on.
    pub fn arrears_60_plus(&self) -> f64 {
        self.d60 + self.d90 + self.d120 + self.d150 + self.d180
    }
}
