//! Video endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Video, CreateVideoRequest, UpdateVideoRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> Result<Json<Vec<Video>>, ApiError> {
    Ok(Json(state.storage.get_all_videos().await?))
}

/// GET /api/videos/:id
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Video>, ApiError> {
    state
        .storage
        .get_video_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))
}

/// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    request.validate()?;

    let video = state.storage.create_video(request).await?;

    info!(video_id = %video.id, admin = %admin.username, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}

/// PATCH /api/videos/:id
pub async fn update_video(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVideoRequest>,
) -> Result<Json<Video>, ApiError> {
    request.validate()?;

    let video = state
        .storage
        .update_video(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

    info!(video_id = %id, admin = %admin.username, "Video updated");

    Ok(Json(video))
}

/// DELETE /api/videos/:id
pub async fn delete_video(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_video(id).await? {
        return Err(ApiError::NotFound("Video not found".to_string()));
    }

    info!(video_id = %id, admin = %admin.username, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}
