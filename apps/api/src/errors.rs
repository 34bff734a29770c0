use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The only message a caller ever sees when simplification fails.
pub const SIMPLIFICATION_FAILED_MESSAGE: &str = "Failed to simplify text. Please try again.";

/// The single failure mode of the simplification service.
///
/// Carries no detail on purpose: the underlying provider, transport or parse
/// error is logged where it happens and dropped before it reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to simplify text. Please try again.")]
pub struct SimplificationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Simplification(#[from] SimplificationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Simplification(e) => (
                StatusCode::BAD_GATEWAY,
                "SIMPLIFICATION_FAILED",
                e.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
