//! Handler for alias creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under an alias.
///
/// # Endpoint
///
/// `POST /api/url`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, 409 Conflict if the alias is
/// already taken, 500 Internal Server Error if storage is unavailable.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let id = state.aliases.save(&payload.url, &payload.alias).await?;

    tracing::info!(alias = %payload.alias, id, "alias created");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            id,
            alias: payload.alias,
        }),
    ))
}
