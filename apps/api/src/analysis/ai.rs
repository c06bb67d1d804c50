//! Pluggable analyzer consulted by `/analyze_file_ai/`.
//!
//! Default: `HeuristicFallback`, which always defers to the heuristic pipeline.
//! `AppState` holds an `Arc<dyn AiAnalyzer>`, swapped at startup.

use async_trait::async_trait;

use super::models::AnalysisResult;

/// Implement this to put a model-backed analyzer behind the AI endpoint
/// without touching the handler or the orchestrator.
#[async_trait]
pub trait AiAnalyzer: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// `None` means "defer to the heuristic analysis".
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Option<AnalysisResult>;
}

/// No model configured: every request is scored heuristically.
pub struct HeuristicFallback;

#[async_trait]
impl AiAnalyzer for HeuristicFallback {
    fn name(&self) -> &'static str {
        "heuristic-fallback"
    }

    async fn analyze(
        &self,
        _resume_text: &str,
        _job_description: Option<&str>,
    ) -> Option<AnalysisResult> {
        None
    }
}
