//! Axum route handlers for the Resume API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::latex::{assemble, compile, TemplateId};
use crate::models::resume::ResumeRecord;
use crate::resume::normalize::normalize;
use crate::resume::readiness::{check, Readiness};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Raw resume mapping; normalized before use.
    pub data: Value,
    /// Overrides the configured default template.
    #[serde(default)]
    pub template: Option<TemplateId>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    #[serde(flatten)]
    pub readiness: Readiness,
    /// The normalized record the check ran on, so clients can see what survived cleaning.
    pub record: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct LatexResponse {
    pub template: TemplateId,
    pub latex: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/readiness
///
/// Reports every precondition the input fails before generation is attempted.
pub async fn handle_readiness(Json(raw): Json<Value>) -> Json<ReadinessResponse> {
    let record = normalize(&raw);
    Json(ReadinessResponse {
        readiness: check(&record),
        record,
    })
}

/// POST /api/v1/resumes/latex
///
/// Returns the assembled LaTeX source without compiling it.
pub async fn handle_latex(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<LatexResponse>, AppError> {
    let template = request.template.unwrap_or(state.config.template);
    let record = ready_record(&request.data)?;

    Ok(Json(LatexResponse {
        template,
        latex: assemble(&record, template),
    }))
}

/// POST /api/v1/resumes/pdf
///
/// Full pipeline: normalize → assemble → compile. Responds with the PDF as an attachment.
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    let template = request.template.unwrap_or(state.config.template);
    let record = ready_record(&request.data)?;

    let markup = assemble(&record, template);
    let pdf = compile(&markup, &state.compiler).await?;

    let filename = download_filename(&record.personal.full_name);
    info!(%template, bytes = pdf.len(), %filename, "resume PDF generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// Normalizes the input and rejects it if any generation precondition is unmet.
fn ready_record(raw: &Value) -> Result<ResumeRecord, AppError> {
    let record = normalize(raw);
    let readiness = check(&record);
    if !readiness.ready {
        return Err(AppError::NotReady(readiness.missing));
    }
    Ok(record)
}

/// `resume_<name>.pdf` with the name lowercased and spaces turned into underscores.
/// Characters that are unsafe in a header value are dropped.
pub fn download_filename(full_name: &str) -> String {
    let safe: String = full_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-') || c.is_whitespace())
        .collect();
    let slug = safe
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_lowercase();

    if slug.is_empty() {
        "resume_professional.pdf".to_string()
    } else {
        format!("resume_{slug}.pdf")
    }
}
