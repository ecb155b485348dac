//! Artist endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Artist, CreateArtistRequest, UpdateArtistRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, ApiError> {
    Ok(Json(state.storage.get_all_artists().await?))
}

/// GET /api/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artist>, ApiError> {
    state
        .storage
        .get_artist_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Artist not found".to_string()))
}

/// POST /api/artists
///
/// The slug is derived from the name when omitted; a taken slug is a 409.
pub async fn create_artist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreateArtistRequest>,
) -> Result<(StatusCode, Json<Artist>), ApiError> {
    request.validate()?;
    if request.resolved_slug().is_empty() {
        return Err(ApiError::Validation(
            "slug: Name must contain at least one letter or digit".to_string(),
        ));
    }

    let artist = state.storage.create_artist(request).await?;

    info!(
        artist_id = %artist.id,
        slug = %artist.slug,
        admin = %admin.username,
        "Artist created"
    );

    Ok((StatusCode::CREATED, Json(artist)))
}

/// PATCH /api/artists/:id
pub async fn update_artist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateArtistRequest>,
) -> Result<Json<Artist>, ApiError> {
    request.validate()?;

    let artist = state
        .storage
        .update_artist(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Artist not found".to_string()))?;

    info!(artist_id = %id, admin = %admin.username, "Artist updated");

    Ok(Json(artist))
}

/// DELETE /api/artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_artist(id).await? {
        return Err(ApiError::NotFound("Artist not found".to_string()));
    }

    info!(artist_id = %id, admin = %admin.username, "Artist deleted");

    Ok(StatusCode::NO_CONTENT)
}
