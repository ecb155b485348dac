//! Post endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Post, CreatePostRequest, UpdatePostRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.storage.get_all_posts().await?))
}

/// GET /api/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    state
        .storage
        .get_post_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    request.validate()?;

    let post = state.storage.create_post(request).await?;

    info!(post_id = %post.id, admin = %admin.username, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /api/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    request.validate()?;

    let post = state
        .storage
        .update_post(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

    info!(post_id = %id, admin = %admin.username, "Post updated");

    Ok(Json(post))
}

/// DELETE /api/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_post(id).await? {
        return Err(ApiError::NotFound("Post not found".to_string()));
    }

    info!(post_id = %id, admin = %admin.username, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
