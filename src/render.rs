//! Terminal rendering of extracted records.
//!
//! Two formats: a markdown table for on-screen reading (pretty-printed via
//! `bat` when stdout is a terminal) and tab-separated plain text for piping
//! into other tools. Amounts render as rand values with thousands grouping
//! in markdown, and as bare two-decimal numbers in plain mode.

use crate::record::{DebtorRecord, BUCKET_LABELS};
use crate::report::Summary;

const HEADERS: [&str; 12] = [
    "Account", "Name", "Current", "30 Days", "60 Days", "90 Days", "120 Days", "150 Days",
    "180 Days", "Balance", "Email", "Phone",
];

// ── Markdown rendering ────────────────────────────────────────────

pub fn render_markdown(records: &[DebtorRecord]) -> String {
    let mut out = String::new();

    out.push_str("| ");
    out.push_str(&HEADERS.join(" | "));
    out.push_str(" |\n|");
    for _ in 0..HEADERS.len() {
        out.push_str(" --- |");
    }
    out.push('\n');

    for record in records {
        out.push_str("| ");
        out.push_str(&row_cells_markdown(record).join(" | "));
        out.push_str(" |\n");
    }

    out
}

/// Append the ageing totals as a markdown section.
pub fn render_summary_markdown(summary: &Summary, out: &mut String) {
    out.push_str("\n## Totals\n\n");

    out.push_str("| ");
    out.push_str(&BUCKET_LABELS.join(" | "));
    out.push_str(" |\n|");
    for _ in 0..BUCKET_LABELS.len() {
        out.push_str(" --- |");
    }
    out.push_str("\n| ");
    let totals: Vec<String> = summary.bucket_totals.iter().map(|&v| format_rand(v)).collect();
    out.push_str(&totals.join(" | "));
    out.push_str(" |\n\n");

    out.push_str(&format!(
        "Total outstanding: **{}** across **{}** accounts\n",
        format_rand(summary.total_outstanding),
        summary.accounts
    ));
}

fn row_cells_markdown(record: &DebtorRecord) -> Vec<String> {
    let mut cells = vec![record.account_number.clone(), escape_pipe(&record.name)];
    cells.extend(record.buckets().iter().map(|&v| format_rand(v)));
    cells.push(format_rand(record.balance));
    cells.push(escape_pipe(&record.email));
    cells.push(escape_pipe(&record.phone));
    cells
}

// ── Plain text rendering ──────────────────────────────────────────

pub fn render_plain(records: &[DebtorRecord]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join("\t"));
    out.push('\n');

    for record in records {
        let mut cells = vec![record.account_number.clone(), record.name.clone()];
        cells.extend(record.buckets().iter().map(|&v| format!("{v:.2}")));
        cells.push(format!("{:.2}", record.balance));
        cells.push(record.email.clone());
        cells.push(record.phone.clone());
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

/// Append the ageing totals as tab-separated lines.
pub fn render_summary_plain(summary: &Summary, out: &mut String) {
    out.push('\n');
    out.push_str(&BUCKET_LABELS.join("\t"));
    out.push('\n');
    let totals: Vec<String> = summary
        .bucket_totals
        .iter()
        .map(|&v| format!("{v:.2}"))
        .collect();
    out.push_str(&totals.join("\t"));
    out.push('\n');
    out.push_str(&format!(
        "Total outstanding\t{:.2}\nAccounts\t{}\n",
        summary.total_outstanding, summary.accounts
    ));
}

// ── Formatting helpers ────────────────────────────────────────────

/// Format a monetary value as rand: `R 1,550.50`.
pub fn format_rand(value: f64) -> String {
    format!("R {}", group_thousands(&format!("{value:.2}")))
}

/// Insert thousands commas into a `-?digits.dd` decimal string.
fn group_thousands(s: &str) -> String {
    let (sign, rest) = s.strip_prefix('-').map_or(("", s), |r| ("-", r));
    let (int_part, frac) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac}")
}

/// Escape pipe characters for markdown table cells.
fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DebtorRecord {
        DebtorRecord {
            account_number: "123456".into(),
            name: "JOHN SMITH".into(),
            current: 1200.0,
            d30: 0.0,
            d60: 350.5,
            d90: 0.0,
            d120: 0.0,
            d150: 0.0,
            d180: 0.0,
            balance: 1550.5,
            email: "john@example.com".into(),
            phone: "0821234567".into(),
            medical_aid_control: false,
        }
    }

    // ── render_markdown ──────────────────────────────────────────

    #[test]
    fn markdown_has_header_and_row() {
        let md = render_markdown(&[sample()]);
        assert!(md.contains("| Account | Name |"));
        assert!(md.contains("| --- |"));
        assert!(md.contains("| 123456 | JOHN SMITH |"));
        assert!(md.contains("R 1,200.00"));
        assert!(md.contains("R 1,550.50"));
    }

    #[test]
    fn markdown_one_row_per_record() {
        let md = render_markdown(&[sample(), sample()]);
        assert_eq!(md.matches("123456").count(), 2);
    }

    #[test]
    fn markdown_escapes_pipes_in_name() {
        let mut record = sample();
        record.name = "SMITH | SONS".into();
        let md = render_markdown(&[record]);
        assert!(md.contains("SMITH \\| SONS"));
    }

    #[test]
    fn markdown_empty_records_is_header_only() {
        let md = render_markdown(&[]);
        assert_eq!(md.lines().count(), 2);
    }

    // ── render_plain ─────────────────────────────────────────────

    #[test]
    fn plain_is_tsv() {
        let text = render_plain(&[sample()]);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Account\tName\t"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("123456\tJOHN SMITH\t1200.00\t"));
        assert!(row.ends_with("john@example.com\t0821234567"));
    }

    // ── summary rendering ────────────────────────────────────────

    #[test]
    fn summary_markdown_totals() {
        let summary = Summary::from_records(&[sample()]);
        let mut out = String::new();
        render_summary_markdown(&summary, &mut out);
        assert!(out.contains("## Totals"));
        assert!(out.contains("R 350.50"));
        assert!(out.contains("**1** accounts"));
    }

    #[test]
    fn summary_plain_totals() {
        let summary = Summary::from_records(&[sample()]);
        let mut out = String::new();
        render_summary_plain(&summary, &mut out);
        assert!(out.contains("Total outstanding\t1550.50"));
        assert!(out.contains("Accounts\t1"));
    }

    // ── format_rand ──────────────────────────────────────────────

    #[test]
    fn rand_groups_thousands() {
        assert_eq!(format_rand(1550.5), "R 1,550.50");
        assert_eq!(format_rand(1234567.89), "R 1,234,567.89");
    }

    #[test]
    fn rand_small_values_ungrouped() {
        assert_eq!(format_rand(0.0), "R 0.00");
        assert_eq!(format_rand(999.99), "R 999.99");
    }

    #[test]
    fn rand_negative_credit() {
        assert_eq!(format_rand(-1550.5), "R -1,550.50");
    }
}
