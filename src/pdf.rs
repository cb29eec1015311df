//! PDF text extraction.
//!
//! Uses [`pdf_extract`] to pull the text layer out of a report. Since
//! `pdf_extract` can panic on malformed input (rather than returning
//! errors), all calls are wrapped in [`std::panic::catch_unwind`] to convert
//! panics into [`DebtscanError::Document`] errors.
//!
//! The output is the raw, ordered line sequence the extractor walks. Lines
//! keep their positions (blank lines included) because the contact window
//! below an account line is counted in lines, not in visible text.

use crate::error::{DebtscanError, Result};
use std::panic::{self, AssertUnwindSafe};

/// Extract pages of text from a PDF byte slice, returning one `String` per
/// page.
///
/// Panics from the underlying library are caught and converted to errors.
fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    let data = data.to_vec(); // owned copy for the unwind boundary
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(DebtscanError::Document(format!(
            "PDF extraction failed: {e}"
        ))),
        Err(_) => Err(DebtscanError::Document(
            "PDF extraction panicked (malformed document)".into(),
        )),
    }
}

/// Extract the ordered line sequence from a PDF report.
///
/// Trailing whitespace is trimmed from each line; blank lines are kept so
/// look-ahead distances match the printed layout. A PDF whose pages carry no
/// text at all (scanned or image-only) is a document-level error.
pub fn extract_lines(data: &[u8]) -> Result<Vec<String>> {
    let pages = extract_pages(data)?;

    let lines: Vec<String> = pages
        .iter()
        .flat_map(|page| page.lines())
        .map(|line| line.trim_end().to_string())
        .collect();

    if lines.iter().all(|line| line.is_empty()) {
        return Err(DebtscanError::Document(
            "PDF contains no extractable text (may be scanned/image-only)".into(),
        ));
    }

    Ok(lines)
}
