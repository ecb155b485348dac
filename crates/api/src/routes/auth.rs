//! Admin authentication endpoints.

use axum::{extract::State, Json};
use domain::models::{AdminLoginRequest, AdminLoginResponse};
use serde::Serialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ClientIp, CurrentAdmin};
use crate::services::admin_login::{self, LoginPolicy};

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    request.validate()?;

    let response = admin_login::login(
        state.storage.as_ref(),
        &state.jwt,
        LoginPolicy::from(&state.config.security),
        request,
        ip_address,
    )
    .await?;

    Ok(Json(response))
}

/// The admin identified by the presented token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAdminResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// GET /api/admin/me
pub async fn me(CurrentAdmin(admin): CurrentAdmin) -> Json<CurrentAdminResponse> {
    Json(CurrentAdminResponse {
        id: admin.admin_id.to_string(),
        username: admin.username,
        role: admin.role,
    })
}
