//! Per-user saved-legislation preferences
//!
//! `user_id` is an opaque string issued by the auth provider in front of
//! this API; no identity checks happen here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::legislation::ApiError;
use crate::AppState;
use lawvely_common::db;

/// Response for a user's saved legislation list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub user_id: String,
    pub legislation_ids: Vec<String>,
}

/// GET /api/users/:user_id/preferences
pub async fn list_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let legislation_ids = db::list_preferences(&state.db, &user_id).await?;

    Ok(Json(PreferencesResponse {
        user_id,
        legislation_ids,
    }))
}

/// PUT /api/users/:user_id/preferences/:id
///
/// Idempotent; 404 when the legislation id does not exist.
pub async fn save_preference(
    State(state): State<AppState>,
    Path((user_id, legislation_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let saved = db::save_preference(&state.db, &user_id, &legislation_id).await?;

    if !saved {
        return Err(ApiError::NotFound(legislation_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/:user_id/preferences/:id
///
/// Idempotent; deleting an unsaved id is a no-op.
pub async fn remove_preference(
    State(state): State<AppState>,
    Path((user_id, legislation_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    db::remove_preference(&state.db, &user_id, &legislation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
