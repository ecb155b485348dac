//! Event endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::event::validate_schedule;
use domain::models::{CreateEventRequest, Event, UpdateEventRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// GET /api/events
///
/// Ordered by event date, soonest first.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.storage.get_all_events().await?))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    state
        .storage
        .get_event_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    request.validate()?;
    request.validate_schedule()?;

    let event = state.storage.create_event(request).await?;

    info!(
        event_id = %event.id,
        date = %event.date,
        admin = %admin.username,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /api/events/:id
///
/// A date change is checked against the stored end date and vice versa.
pub async fn update_event(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    request.validate()?;
    request.validate_schedule()?;

    if request.date.is_some() || request.end_date.is_some() {
        let current = state
            .storage
            .get_event_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
        validate_schedule(
            Some(request.date.unwrap_or(current.date)),
            request.end_date.or(current.end_date),
        )?;
    }

    let event = state
        .storage
        .update_event(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    info!(event_id = %id, admin = %admin.username, "Event updated");

    Ok(Json(event))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_event(id).await? {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    info!(event_id = %id, admin = %admin.username, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}
