//! `debtscan`: structured record extraction from pharmacy aged-debtors
//! PDF reports.
//!
//! A report arrives as a PDF with a text layer: one line per account,
//! anchored by a six-digit account number, followed by seven ageing buckets
//! and a balance, with contact details printed on nearby lines. This crate
//! pulls the text layer out, walks the lines once, and emits one immutable
//! [`DebtorRecord`] per real account, flagging medical-aid control rows and
//! recovering email/phone details where the layout allows.
//!
//! Extraction is deterministic: the same input always yields the same
//! records, which matters because they drive financial totals and payment
//! reminders downstream.

pub mod config;
pub mod contact;
pub mod error;
pub mod extract;
pub mod line;
pub mod name;
pub mod numeric;
pub mod pdf;
pub mod record;
pub mod render;
pub mod report;

pub use config::ExtractConfig;
pub use error::{DebtscanError, Result};
pub use extract::extract_records;
pub use record::DebtorRecord;
pub use report::Summary;
