pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Largest resume upload accepted by the analysis endpoint.
const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume generation
        .route("/api/v1/resumes/readiness", post(resume::handle_readiness))
        .route("/api/v1/resumes/latex", post(resume::handle_latex))
        .route("/api/v1/resumes/pdf", post(resume::handle_pdf))
        // Resume analysis
        .route(
            "/api/v1/analysis",
            post(analysis::handle_analyze_upload).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route("/api/v1/analysis/text", post(analysis::handle_analyze_text))
        .route("/api/v1/analysis/chat", post(analysis::handle_chat))
        .fallback(not_found)
        .with_state(state)
}
