use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether a model is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let llm = if state.assistant.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumefit-api",
        "llm": llm,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}
