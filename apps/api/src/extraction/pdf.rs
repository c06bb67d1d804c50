//! PDF text extraction with a primary/fallback strategy.
//!
//! 1. `lopdf`: load from memory, read the text layer page by page.
//! 2. On any error (or panic) from step 1, `pdf-extract` page by page.
//!
//! An empty result after trimming means the file has no text layer and is
//! reported as `EmptyOrScannedDocument`, never as a generic failure.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::{DocumentFormat, ExtractionError};

pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    extract_with(
        "lopdf",
        || extract_with_lopdf(bytes),
        "pdf-extract",
        || extract_with_pdf_extract(bytes),
    )
}

/// Runs `primary`, then `fallback` if the primary errors or panics.
fn extract_with<P, F>(
    primary_name: &str,
    primary: P,
    fallback_name: &str,
    fallback: F,
) -> Result<String, ExtractionError>
where
    P: FnOnce() -> Result<String, String>,
    F: FnOnce() -> Result<String, String>,
{
    let raw = match guarded(primary) {
        Ok(text) => {
            debug!("Extracted {} chars with {primary_name}", text.len());
            text
        }
        Err(primary_err) => {
            warn!("{primary_name} extraction failed: {primary_err}, trying {fallback_name}");
            let text = guarded(fallback).map_err(|fallback_err| ExtractionError::Failed {
                format: DocumentFormat::Pdf,
                reason: format!("{primary_name}: {primary_err}; {fallback_name}: {fallback_err}"),
            })?;
            debug!("Extracted {} chars with {fallback_name}", text.len());
            text
        }
    };

    let text = raw.trim();
    if text.is_empty() {
        return Err(ExtractionError::EmptyOrScannedDocument);
    }
    Ok(text.to_string())
}

fn extract_with_lopdf(bytes: &[u8]) -> Result<String, String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| format!("failed to load PDF: {e}"))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let content = doc
            .extract_text(&[page_num])
            .map_err(|e| format!("page {page_num}: {e}"))?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}

fn extract_with_pdf_extract(bytes: &[u8]) -> Result<String, String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

/// Both parsers are known to panic on some malformed inputs; treat that as an error.
fn guarded<F>(extract: F) -> Result<String, String>
where
    F: FnOnce() -> Result<String, String>,
{
    panic::catch_unwind(AssertUnwindSafe(extract)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(format!("parser panicked: {msg}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pdf_bytes, pdf_without_text};

    #[test]
    fn test_text_layer_is_extracted() {
        let bytes = pdf_bytes(&["Jane Doe", "Senior Engineer"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Jane Doe"), "got {text:?}");
        assert!(text.contains("Senior Engineer"), "got {text:?}");
    }

    #[test]
    fn test_result_is_trimmed() {
        let text = extract_pdf_text(&pdf_bytes(&["Skills"])).unwrap();
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_image_only_pdf_is_scanned_not_failed() {
        let err = extract_pdf_text(&pdf_without_text()).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyOrScannedDocument));
    }

    #[test]
    fn test_garbage_bytes_fail_after_fallback() {
        let err = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        match err {
            ExtractionError::Failed { format, reason } => {
                assert_eq!(format, DocumentFormat::Pdf);
                assert!(reason.contains("lopdf"));
                assert!(reason.contains("pdf-extract"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_fallback_used_when_primary_errors() {
        let text = extract_with(
            "primary",
            || Err("broken xref table".to_string()),
            "fallback",
            || Ok("  Jane Doe\nSkills\n".to_string()),
        )
        .unwrap();
        assert_eq!(text, "Jane Doe\nSkills");
    }

    #[test]
    fn test_fallback_used_when_primary_panics() {
        let text = extract_with(
            "primary",
            || -> Result<String, String> { panic!("unexpected object") },
            "fallback",
            || Ok("Experience".to_string()),
        )
        .unwrap();
        assert_eq!(text, "Experience");
    }

    #[test]
    fn test_blank_fallback_text_is_scanned_not_failed() {
        let err = extract_with(
            "primary",
            || Err("unsupported filter".to_string()),
            "fallback",
            || Ok(" \n\t ".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyOrScannedDocument));
    }

    #[test]
    fn test_fallback_not_run_when_primary_succeeds() {
        let text = extract_with(
            "primary",
            || Ok("Summary".to_string()),
            "fallback",
            || -> Result<String, String> { panic!("fallback should not run") },
        )
        .unwrap();
        assert_eq!(text, "Summary");
    }

    #[test]
    fn test_guarded_converts_panic_to_error() {
        let result = guarded(|| panic!("bad xref"));
        assert_eq!(result.unwrap_err(), "parser panicked: bad xref");
    }
}
