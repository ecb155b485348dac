//! Release endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Release, CreateReleaseRequest, UpdateReleaseRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/releases
pub async fn list_releases(State(state): State<AppState>) -> Result<Json<Vec<Release>>, ApiError> {
    Ok(Json(state.storage.get_all_releases().await?))
}

/// GET /api/releases/:id
pub async fn get_release(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Release>, ApiError> {
    state
        .storage
        .get_release_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Release not found".to_string()))
}

/// POST /api/releases
pub async fn create_release(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreateReleaseRequest>,
) -> Result<(StatusCode, Json<Release>), ApiError> {
    request.validate()?;

    let release = state.storage.create_release(request).await?;

    info!(release_id = %release.id, admin = %admin.username, "Release created");

    Ok((StatusCode::CREATED, Json(release)))
}

/// PATCH /api/releases/:id
pub async fn update_release(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReleaseRequest>,
) -> Result<Json<Release>, ApiError> {
    request.validate()?;

    let release = state
        .storage
        .update_release(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Release not found".to_string()))?;

    info!(release_id = %id, admin = %admin.username, "Release updated");

    Ok(Json(release))
}

/// DELETE /api/releases/:id
pub async fn delete_release(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_release(id).await? {
        return Err(ApiError::NotFound("Release not found".to_string()));
    }

    info!(release_id = %id, admin = %admin.username, "Release deleted");

    Ok(StatusCode::NO_CONTENT)
}
