use std::sync::Arc;

use crate::analysis::ai::{AiAnalyzer, HeuristicFallback};
use crate::analysis::linguistics::LinguisticContext;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stop words and lemmatizer, loaded once at startup and read-only afterwards.
    pub linguistics: Arc<LinguisticContext>,
    /// Pluggable AI analyzer. Default: HeuristicFallback, which always defers.
    pub ai_analyzer: Arc<dyn AiAnalyzer>,
}

impl AppState {
    pub fn new(config: Config, linguistics: LinguisticContext) -> Self {
        Self {
            config,
            linguistics: Arc::new(linguistics),
            ai_analyzer: Arc::new(HeuristicFallback),
        }
    }
}
