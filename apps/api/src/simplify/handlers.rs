//! Axum route handlers for the Simplify API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SimplifiedResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SimplifyRequest {
    pub text: String,
}

/// POST /api/v1/simplify
///
/// Returns the `SimplifiedResult` for the submitted text. Blank input is
/// rejected here and never reaches the provider.
pub async fn handle_simplify(
    State(state): State<AppState>,
    Json(request): Json<SimplifyRequest>,
) -> Result<Json<SimplifiedResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let result = state.simplifier.simplify(&request.text).await?;

    Ok(Json(result))
}
