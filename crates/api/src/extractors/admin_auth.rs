//! Extractor for the admin authenticated by `require_admin`.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminAuth;

/// The authenticated admin. Only valid on routes behind `require_admin`;
/// elsewhere it rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminAuth);

#[async_trait]
impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminAuth>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".into()))
    }
}
