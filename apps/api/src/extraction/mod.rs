//! Text extraction — turns uploaded PDF/DOCX bytes into plain text.
//!
//! PDFs go through `lopdf` first and fall back to `pdf-extract`; DOCX files are
//! read straight out of the `word/document.xml` part. Nothing touches disk.

pub mod docx;
pub mod pdf;

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from an upload's filename (extension, case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("DOCX"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The PDF parsed but carries no text layer (scanned or image-only).
    #[error("no selectable text in PDF")]
    EmptyOrScannedDocument,

    #[error("{format} extraction failed: {reason}")]
    Failed {
        format: DocumentFormat,
        reason: String,
    },
}

/// An uploaded file. Dropped as soon as its text has been extracted.
#[derive(Debug, Clone)]
pub struct Document {
    bytes: Bytes,
    format: DocumentFormat,
}

impl Document {
    pub fn new(bytes: Bytes, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Extracts trimmed plain text. CPU-bound: call from `spawn_blocking`.
    ///
    /// A PDF without text fails with `EmptyOrScannedDocument`; a DOCX with only
    /// empty paragraphs succeeds with an empty string.
    pub fn extract_text(&self) -> Result<String, ExtractionError> {
        match self.format {
            DocumentFormat::Pdf => pdf::extract_pdf_text(&self.bytes),
            DocumentFormat::Docx => docx::extract_docx_text(&self.bytes),
        }
    }
}
