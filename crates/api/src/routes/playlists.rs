//! Playlist endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Playlist, CreatePlaylistRequest, UpdatePlaylistRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/playlists
pub async fn list_playlists(State(state): State<AppState>) -> Result<Json<Vec<Playlist>>, ApiError> {
    Ok(Json(state.storage.get_all_playlists().await?))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Playlist>, ApiError> {
    state
        .storage
        .get_playlist_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>), ApiError> {
    request.validate()?;

    let playlist = state.storage.create_playlist(request).await?;

    info!(playlist_id = %playlist.id, admin = %admin.username, "Playlist created");

    Ok((StatusCode::CREATED, Json(playlist)))
}

/// PATCH /api/playlists/:id
pub async fn update_playlist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePlaylistRequest>,
) -> Result<Json<Playlist>, ApiError> {
    request.validate()?;

    let playlist = state
        .storage
        .update_playlist(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    info!(playlist_id = %id, admin = %admin.username, "Playlist updated");

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_playlist(id).await? {
        return Err(ApiError::NotFound("Playlist not found".to_string()));
    }

    info!(playlist_id = %id, admin = %admin.username, "Playlist deleted");

    Ok(StatusCode::NO_CONTENT)
}
