//! Axum route handlers for the upload endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::analysis::linguistics::LinguisticContext;
use crate::analysis::models::{AnalysisResult, LegacyAnalysisResponse};
use crate::analysis::orchestrator::{analyze, score_resume};
use crate::analysis::upload::parse_upload;
use crate::errors::AppError;
use crate::extraction::Document;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze_file/
///
/// Primary endpoint. Rejects uploads whose extracted text is empty; any
/// unexpected failure is reported with a generic message.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();
    let upload = parse_upload(multipart).await?;
    info!(%request_id, filename = %upload.filename, "Analyzing upload");

    let (document, job_description) = upload.into_document()?;
    let text = extract(document).await.map_err(mask_internal)?;

    if text.trim().is_empty() {
        return Err(AppError::EmptyExtractedText);
    }

    let ctx = state.linguistics.clone();
    let analysis = run_blocking(move || score_resume(&text, job_description.as_deref(), &ctx))
        .await
        .map_err(mask_internal)?;

    info!(
        %request_id,
        score = analysis.total_score(),
        format_score = analysis.format_score,
        keyword_score = analysis.keyword_score(),
        "Analysis complete"
    );

    Ok(Json(analysis.into_result()))
}

/// POST /analyze/
///
/// Legacy endpoint: only `score` carries data. Empty extracted text is scored
/// as-is rather than rejected.
pub async fn handle_analyze_legacy(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<LegacyAnalysisResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let upload = parse_upload(multipart).await?;
    info!(%request_id, filename = %upload.filename, "Analyzing upload (legacy)");

    let (document, job_description) = upload.into_document()?;
    let text = extract(document).await?;

    let result = heuristic(text, job_description, state.linguistics.clone()).await?;
    info!(%request_id, score = result.score, "Legacy analysis complete");

    Ok(Json(LegacyAnalysisResponse::from(&result)))
}

/// POST /analyze_file_ai/
///
/// Consults the configured `AiAnalyzer`; when it defers, the heuristic
/// analysis answers instead.
pub async fn handle_analyze_file_ai(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let request_id = Uuid::new_v4();
    let upload = parse_upload(multipart).await?;
    info!(%request_id, filename = %upload.filename, "Analyzing upload (AI)");

    let (document, job_description) = upload.into_document()?;
    let text = extract(document).await?;

    if let Some(result) = state
        .ai_analyzer
        .analyze(&text, job_description.as_deref())
        .await
    {
        info!(%request_id, analyzer = state.ai_analyzer.name(), score = result.score, "AI analysis complete");
        return Ok(Json(result));
    }

    info!(
        %request_id,
        analyzer = state.ai_analyzer.name(),
        "AI analyzer deferred, using heuristic analysis"
    );
    let result = heuristic(text, job_description, state.linguistics.clone()).await?;
    info!(%request_id, score = result.score, "Analysis complete");

    Ok(Json(result))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn extract(document: Document) -> Result<String, AppError> {
    let format = document.format();
    let bytes = document.byte_len();
    let text = run_blocking(move || document.extract_text()).await??;
    info!(%format, bytes, chars = text.len(), "Text extracted");
    Ok(text)
}

async fn heuristic(
    text: String,
    job_description: Option<String>,
    ctx: Arc<LinguisticContext>,
) -> Result<AnalysisResult, AppError> {
    run_blocking(move || analyze(&text, job_description.as_deref(), &ctx)).await
}

/// Runs CPU-bound work off the async executor.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed: {e}")))
}

fn mask_internal(err: AppError) -> AppError {
    match err {
        AppError::Internal(e) => AppError::Processing(format!("{e:#}")),
        other => other,
    }
}
