use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::{DocumentFormat, ExtractionError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF has no selectable text")]
    EmptyOrScannedDocument,

    #[error("{format} extraction failed: {reason}")]
    ExtractionFailed {
        format: DocumentFormat,
        reason: String,
    },

    #[error("Extracted text is empty")]
    EmptyExtractedText,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    /// Internal failure on the primary endpoint; the cause is logged, never shown.
    #[error("Processing error: {0}")]
    Processing(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::EmptyOrScannedDocument => AppError::EmptyOrScannedDocument,
            ExtractionError::Failed { format, reason } => {
                AppError::ExtractionFailed { format, reason }
            }
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat(_)
            | AppError::EmptyOrScannedDocument
            | AppError::EmptyExtractedText
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ExtractionFailed { .. } | AppError::Processing(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the caller.
    pub fn detail(&self) -> String {
        match self {
            AppError::UnsupportedFormat(_) => {
                "Unsupported file format. Please upload a PDF or DOCX file.".to_string()
            }
            AppError::EmptyOrScannedDocument => "This appears to be a scanned or image-based PDF. \
                 Please provide a PDF with selectable text."
                .to_string(),
            AppError::ExtractionFailed { format, .. } => format!(
                "Failed to extract text from {format}. Please ensure the file is not corrupted."
            ),
            AppError::EmptyExtractedText => "No text could be extracted from the file. \
                 Please ensure the file is not empty or corrupted."
                .to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::PayloadTooLarge(_) => "Uploaded file is too large.".to_string(),
            AppError::Processing(_) => "An error occurred while processing your file.".to_string(),
            AppError::Internal(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::ExtractionFailed { format, reason } => {
                tracing::error!("{format} extraction error: {reason}");
            }
            AppError::Processing(msg) => {
                tracing::error!("Processing error: {msg}");
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
            }
            other => {
                tracing::warn!("Rejected upload: {other}");
            }
        }

        let body = Json(json!({ "detail": self.detail() }));

        (status, body).into_response()
    }
}
