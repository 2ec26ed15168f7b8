//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::chat::{chat_reply, ChatTurn};
use crate::analysis::extract::extract_text;
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_role: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub job_role: String,
    /// Extracted text, so the client can reuse it for chat.
    pub resume_text: String,
    pub report: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Multipart upload: `file` (PDF or plain text) and `job_role`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut job_role = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                resume_text = Some(
                    extract_text(data, content_type.as_deref(), file_name.as_deref()).await?,
                );
            }
            "job_role" => {
                job_role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read job_role: {e}")))?;
            }
            _ => {}
        }
    }

    let resume_text =
        resume_text.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;
    if job_role.trim().is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let report = analyze_resume(state.assistant.as_ref(), &resume_text, &job_role).await;
    Ok(Json(AnalysisResponse {
        job_role,
        resume_text,
        report,
    }))
}

/// POST /api/v1/analysis/text
///
/// Analyzes already-extracted resume text. Empty inputs yield the emergency report.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Json<AnalysisResponse> {
    let report =
        analyze_resume(state.assistant.as_ref(), &request.resume_text, &request.job_role).await;
    Json(AnalysisResponse {
        job_role: request.job_role,
        resume_text: request.resume_text,
        report,
    })
}

/// POST /api/v1/analysis/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = chat_reply(
        state.assistant.as_ref(),
        &request.message,
        &request.resume_text,
        &request.history,
    )
    .await;
    Json(ChatResponse { reply })
}
