//! Admin JWT authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::jwt::{extract_admin_id, AdminClaims, JwtConfig, JwtError};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated admin stored in request extensions by [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub admin_id: Uuid,
    pub username: String,
    pub role: String,
    /// JWT ID of the access token.
    pub jti: String,
}

impl AdminAuth {
    pub fn validate(jwt: &JwtConfig, token: &str) -> Result<Self, JwtError> {
        let claims = jwt.validate_admin_token(token)?;
        Self::from_claims(claims)
    }

    fn from_claims(claims: AdminClaims) -> Result<Self, JwtError> {
        let admin_id = extract_admin_id(&claims)?;
        Ok(Self {
            admin_id,
            username: claims.username,
            role: claims.role,
            jti: claims.jti,
        })
    }
}

/// Returns the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Rejects the request with 401 unless it carries a valid admin token.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
    {
        Some(token) => token,
        None => {
            return ApiError::Unauthorized("Missing or invalid Authorization header".into())
                .into_response()
        }
    };

    match AdminAuth::validate(&state.jwt, token) {
        Ok(auth) => {
            tracing::debug!(admin_id = %auth.admin_id, "Admin authenticated");
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("Admin token rejected: {}", e);
            ApiError::Unauthorized("Invalid or expired token".into()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("bearer abc"), None);
    }

    #[test]
    fn test_validate_round_trip() {
        let jwt = JwtConfig::new(SECRET, 3600, 0);
        let admin_id = Uuid::new_v4();
        let issued = jwt.issue_admin_token(admin_id, "label", "admin").unwrap();

        let auth = AdminAuth::validate(&jwt, &issued.token).unwrap();
        assert_eq!(auth.admin_id, admin_id);
        assert_eq!(auth.username, "label");
        assert_eq!(auth.role, "admin");
        assert_eq!(auth.jti, issued.jti);
    }

    #[test]
    fn test_validate_rejects_foreign_secret() {
        let issuer = JwtConfig::new("another-secret-that-is-also-32-bytes-long", 3600, 0);
        let issued = issuer
            .issue_admin_token(Uuid::new_v4(), "label", "admin")
            .unwrap();

        let jwt = JwtConfig::new(SECRET, 3600, 0);
        assert!(AdminAuth::validate(&jwt, &issued.token).is_err());
    }

    #[test]
    fn test_claims_with_bad_subject_rejected() {
        let claims = AdminClaims {
            sub: "not-a-uuid".to_string(),
            username: "label".to_string(),
            role: "admin".to_string(),
            exp: 0,
            iat: 0,
            jti: "jti".to_string(),
        };
        assert!(matches!(
            AdminAuth::from_claims(claims),
            Err(JwtError::InvalidToken)
        ));
    }
}
