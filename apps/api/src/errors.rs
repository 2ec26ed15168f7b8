use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::latex::CompileError;
use crate::resume::readiness::Missing;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resume is missing required information")]
    NotReady(Vec<Missing>),

    #[error("Generation failed: {0}")]
    Generation(#[from] CompileError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::NotReady(missing) => {
                let messages: Vec<&str> = missing.iter().map(|m| m.message()).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "RESUME_INCOMPLETE",
                    messages.join("; "),
                    Some(json!({ "missing": missing })),
                )
            }
            AppError::Generation(e) => {
                let status = match e {
                    CompileError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    CompileError::ToolNotFound { .. } => StatusCode::SERVICE_UNAVAILABLE,
                    CompileError::Failed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    CompileError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                tracing::error!(category = e.category(), "Generation failed: {e}");
                (
                    status,
                    "GENERATION_FAILED",
                    e.to_string(),
                    Some(json!({ "category": e.category() })),
                )
            }
            AppError::Extract(e) => {
                let status = match e {
                    ExtractError::Unsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    ExtractError::Pdf(_) | ExtractError::Empty => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                };
                (status, "EXTRACTION_FAILED", e.to_string(), None)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let (Some(Value::Object(extra)), Some(obj)) = (details, error.as_object_mut()) {
            obj.extend(extra);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_ready_lists_missing_items() {
        let response =
            AppError::NotReady(vec![Missing::Email, Missing::EducationOrExperience]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "RESUME_INCOMPLETE");
        assert_eq!(
            body["error"]["missing"],
            json!(["email", "education_or_experience"])
        );
    }

    #[tokio::test]
    async fn test_generation_failure_carries_category() {
        let response = AppError::from(CompileError::Failed {
            message: "Undefined control sequence - check LaTeX syntax".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "GENERATION_FAILED");
        assert_eq!(body["error"]["category"], "compile-error");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Undefined control sequence"));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_gateway_timeout() {
        let response =
            AppError::from(CompileError::Timeout(Duration::from_secs(120))).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_json(response).await["error"]["category"], "timeout");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::from(anyhow::anyhow!("disk on fire")).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
