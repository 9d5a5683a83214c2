use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure is rendered as `{"success": false, "error": ..., "code": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Gemini API request timed out after {seconds} seconds")]
    UpstreamTimeout { seconds: u64 },

    #[error("Gemini API error: {status}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response from Gemini API")]
    UpstreamMalformed,

    #[error("No content variations could be extracted from the model response")]
    EmptyResult,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout { seconds } => AppError::UpstreamTimeout { seconds },
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::MalformedResponse | LlmError::Parse(_) => AppError::UpstreamMalformed,
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::UpstreamTimeout { .. } => (StatusCode::BAD_REQUEST, "UPSTREAM_TIMEOUT"),
            AppError::Upstream { .. } => (StatusCode::BAD_REQUEST, "UPSTREAM_HTTP_ERROR"),
            AppError::UpstreamMalformed => (StatusCode::BAD_REQUEST, "UPSTREAM_MALFORMED_RESPONSE"),
            AppError::EmptyResult => (StatusCode::BAD_REQUEST, "EMPTY_RESULT"),
            AppError::Llm(_) => (StatusCode::BAD_REQUEST, "LLM_ERROR"),
            AppError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Upstream {
                status: upstream,
                message,
            } => {
                tracing::error!("Gemini API error {upstream}: {message}");
                self.to_string()
            }
            AppError::UpstreamTimeout { .. } | AppError::UpstreamMalformed | AppError::Llm(_) => {
                tracing::error!("Generation failed: {self}");
                self.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
