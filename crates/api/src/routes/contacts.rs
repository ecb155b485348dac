//! Contact form endpoint handlers.
//!
//! Submitting the form is public; reading and triaging submissions is admin only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Contact, CreateContactRequest, UpdateContactRequest};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentAdmin;

/// POST /api/contacts
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    request.validate()?;

    let contact = state.storage.create_contact(request).await?;

    info!(
        contact_id = %contact.id,
        category = %contact.category,
        "Contact form submitted"
    );

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.storage.get_all_contacts().await?))
}

/// GET /api/contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    CurrentAdmin(_admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError> {
    state
        .storage
        .get_contact_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))
}

/// PATCH /api/contacts/:id
pub async fn update_contact(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<Contact>, ApiError> {
    request.validate()?;

    let contact = state
        .storage
        .update_contact(id, request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

    info!(
        contact_id = %id,
        status = contact.status.as_str(),
        admin = %admin.username,
        "Contact updated"
    );

    Ok(Json(contact))
}

/// DELETE /api/contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.storage.delete_contact(id).await? {
        return Err(ApiError::NotFound("Contact not found".to_string()));
    }

    info!(contact_id = %id, admin = %admin.username, "Contact deleted");

    Ok(StatusCode::NO_CONTENT)
}
