//! Radio show endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{RadioShow, CreateRadioShowRequest, UpdateRadioShowRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/radio-shows
pub async fn list_radio_shows(State(state): State<AppState>) -> Result<Json<Vec<RadioShow>>, ApiError> {
    Ok(Json(state.storage.get_all_radio_shows().await?))
}

/// GET /api/radio-shows/:id
pub async fn get_radio_show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RadioShow>, ApiError> {
    state
        .storage
        .get_radio_show_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Radio show not found".to_string()))
}

/// POST /api/radio-shows
pub async fn create_radio_show(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreateRadioShowRequest>,
) -> Result<(StatusCode, Json<RadioShow>), ApiError> {
    request.validate()?;

    let show = state.storage.create_radio_show(request).await?;

    info!(radio_show_id = %show.id, admin = %admin.username, "Radio show created");

    Ok((StatusCode::CREATED, Json(show)))
}

/// PATCH /api/radio-shows/:id
pub async fn update_radio_show(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRadioShowRequest>,
) -> Result<Json<RadioShow>, ApiError> {
    request.validate()?;

    let show = state
        .storage
        .update_radio_show(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Radio show not found".to_string()))?;

    info!(radio_show_id = %id, admin = %admin.username, "Radio show updated");

    Ok(Json(show))
}

/// DELETE /api/radio-shows/:id
pub async fn delete_radio_show(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_radio_show(id).await? {
        return Err(ApiError::NotFound("Radio show not found".to_string()));
    }

    info!(radio_show_id = %id, admin = %admin.username, "Radio show deleted");

    Ok(StatusCode::NO_CONTENT)
}
