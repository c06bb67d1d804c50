pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Upload analysis; each path is served with and without the trailing slash
        .route("/analyze_file/", post(handlers::handle_analyze_file))
        .route("/analyze_file", post(handlers::handle_analyze_file))
        .route("/analyze/", post(handlers::handle_analyze_legacy))
        .route("/analyze", post(handlers::handle_analyze_legacy))
        .route("/analyze_file_ai/", post(handlers::handle_analyze_file_ai))
        .route("/analyze_file_ai", post(handlers::handle_analyze_file_ai))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
