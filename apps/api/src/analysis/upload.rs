use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::{Document, DocumentFormat};

/// Fields of an analysis upload (`file` + optional `job_description`).
#[derive(Debug)]
pub struct UploadForm {
    pub filename: String,
    pub data: Bytes,
    pub job_description: Option<String>,
}

impl UploadForm {
    /// Validates the extension and wraps the bytes for extraction.
    pub fn into_document(self) -> Result<(Document, Option<String>), AppError> {
        let format = DocumentFormat::from_filename(&self.filename)
            .ok_or_else(|| AppError::UnsupportedFormat(self.filename.clone()))?;
        Ok((Document::new(self.data, format), self.job_description))
    }
}

/// Parses a multipart analysis upload. Unknown fields are ignored; an empty
/// `job_description` counts as absent.
pub async fn parse_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read form field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read file data", e))?;
                file = Some((filename, data));
            }
            "job_description" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read job_description", e))?;
                if !val.is_empty() {
                    job_description = Some(val);
                }
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    Ok(UploadForm {
        filename,
        data,
        job_description,
    })
}

/// Oversize bodies keep axum's 413; every other multipart failure is a 400.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(filename: &str) -> UploadForm {
        UploadForm {
            filename: filename.to_string(),
            data: Bytes::from_static(b"%PDF-1.5"),
            job_description: Some("rust".to_string()),
        }
    }

    #[test]
    fn test_into_document_accepts_pdf_and_docx() {
        let (doc, jd) = form("CV.PDF").into_document().unwrap();
        assert_eq!(doc.format(), DocumentFormat::Pdf);
        assert_eq!(jd.as_deref(), Some("rust"));

        let (doc, _) = form("cv.docx").into_document().unwrap();
        assert_eq!(doc.format(), DocumentFormat::Docx);
    }

    #[test]
    fn test_into_document_rejects_other_extensions() {
        let err = form("resume.txt").into_document().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(name) if name == "resume.txt"));
    }
}
