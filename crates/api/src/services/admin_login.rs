//! Admin login with failed-attempt lockout.

use chrono::Utc;
use domain::models::{
    login_attempt::count_failures, AdminLoginRequest, AdminLoginResponse, AdminProfile,
    NewLoginAttempt,
};
use domain::{Storage, StorageError};
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{dummy_verify, verify_password};
use tracing::{error, info, warn};

use crate::config::SecurityConfig;
use crate::error::ApiError;
use crate::middleware::metrics::record_admin_login;

pub const TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Too many failed login attempts")]
    LockedOut,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::LockedOut => ApiError::RateLimited,
            LoginError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".into())
            }
            LoginError::Storage(e) => e.into(),
            LoginError::Token(e) => ApiError::Internal(format!("Failed to issue token: {}", e)),
        }
    }
}

/// Lockout thresholds taken from `[security]`.
#[derive(Debug, Clone, Copy)]
pub struct LoginPolicy {
    pub max_attempts: u32,
    pub window_minutes: i64,
}

impl From<&SecurityConfig> for LoginPolicy {
    fn from(config: &SecurityConfig) -> Self {
        Self {
            max_attempts: config.max_login_attempts,
            window_minutes: config.login_window_minutes,
        }
    }
}

/// Authenticates an admin and issues an access token.
///
/// Unknown usernames and wrong passwords both yield
/// [`LoginError::InvalidCredentials`] and both are recorded as failed
/// attempts. A username with `max_attempts` failures inside the window is
/// rejected before the password is checked and the attempt is not recorded.
pub async fn login(
    storage: &dyn Storage,
    jwt: &JwtConfig,
    policy: LoginPolicy,
    request: AdminLoginRequest,
    ip_address: Option<String>,
) -> Result<AdminLoginResponse, LoginError> {
    let username = request.username.trim().to_string();

    let recent = storage
        .get_recent_login_attempts(&username, policy.window_minutes)
        .await?;
    if count_failures(&recent) >= policy.max_attempts as usize {
        warn!(username = %username, "Admin login rejected: too many failed attempts");
        record_admin_login("locked");
        return Err(LoginError::LockedOut);
    }

    let admin = storage.get_admin_user_by_username(&username).await?;
    let verified = match &admin {
        Some(admin) => verify_password(&request.password, &admin.password_hash).unwrap_or_else(|e| {
            error!(username = %username, "Stored admin password hash is unusable: {}", e);
            false
        }),
        None => {
            dummy_verify(&request.password);
            false
        }
    };

    storage
        .record_login_attempt(NewLoginAttempt {
            username: username.clone(),
            ip_address,
            success: verified,
        })
        .await?;

    let mut admin = match admin {
        Some(admin) if verified => admin,
        _ => {
            info!(username = %username, "Admin login failed");
            record_admin_login("failure");
            return Err(LoginError::InvalidCredentials);
        }
    };

    storage.update_admin_last_login(&admin.username).await?;
    admin.last_login_at = Some(Utc::now());

    let issued = jwt.issue_admin_token(admin.id, &admin.username, &admin.role)?;

    info!(admin_id = %admin.id, username = %admin.username, "Admin logged in");
    record_admin_login("success");

    Ok(AdminLoginResponse {
        access_token: issued.token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: issued.expires_in,
        admin: AdminProfile::from(admin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::NewAdminUser;
    use domain::MemStorage;
    use shared::password::hash_password;

    const SECRET: &str = "test-secret-that-is-at-least-32-bytes-long";
    const PASSWORD: &str = "correct horse battery staple";

    fn policy() -> LoginPolicy {
        LoginPolicy {
            max_attempts: 3,
            window_minutes: 15,
        }
    }

    fn request(username: &str, password: &str) -> AdminLoginRequest {
        AdminLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    async fn storage_with_admin() -> MemStorage {
        let storage = MemStorage::new();
        storage
            .create_admin_user(NewAdminUser::new("label", hash_password(PASSWORD).unwrap()))
            .await
            .unwrap();
        storage
    }

    #[tokio::test]
    async fn test_successful_login_issues_token() {
        let storage = storage_with_admin().await;
        let jwt = JwtConfig::new(SECRET, 3600, 0);

        let response = login(
            &storage,
            &jwt,
            policy(),
            request("label", PASSWORD),
            Some("203.0.113.7".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.admin.username, "label");
        assert!(response.admin.last_login_at.is_some());

        let claims = jwt.validate_admin_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, response.admin.id.to_string());
        assert_eq!(claims.role, "admin");

        let attempts = storage
            .get_recent_login_attempts("label", 15)
            .await
            .unwrap();
        assert_eq!(attempts.len(), 1);
        assert!(attempts[0].success);
        assert_eq!(attempts[0].ip_address.as_deref(), Some("203.0.113.7"));

        let stored = storage
            .get_admin_user_by_username("label")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let storage = storage_with_admin().await;
        let jwt = JwtConfig::new(SECRET, 3600, 0);

        let wrong_password = login(&storage, &jwt, policy(), request("label", "nope"), None)
            .await
            .unwrap_err();
        let unknown_user = login(&storage, &jwt, policy(), request("ghost", PASSWORD), None)
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, LoginError::InvalidCredentials));
        assert!(matches!(unknown_user, LoginError::InvalidCredentials));

        let attempts = storage
            .get_recent_login_attempts("ghost", 15)
            .await
            .unwrap();
        assert_eq!(attempts.len(), 1);
        assert!(!attempts[0].success);
    }

    #[tokio::test]
    async fn test_lockout_after_max_failures() {
        let storage = storage_with_admin().await;
        let jwt = JwtConfig::new(SECRET, 3600, 0);

        for _ in 0..3 {
            let err = login(&storage, &jwt, policy(), request("label", "nope"), None)
                .await
                .unwrap_err();
            assert!(matches!(err, LoginError::InvalidCredentials));
        }

        // Even the right password is refused while locked out.
        let err = login(&storage, &jwt, policy(), request("label", PASSWORD), None)
            .await
            .unwrap_err();
        assert!(matches!(err, LoginError::LockedOut));

        let attempts = storage
            .get_recent_login_attempts("label", 15)
            .await
            .unwrap();
        assert_eq!(attempts.len(), 3);
    }

    #[tokio::test]
    async fn test_successes_do_not_count_toward_lockout() {
        let storage = storage_with_admin().await;
        let jwt = JwtConfig::new(SECRET, 3600, 0);

        for _ in 0..5 {
            login(&storage, &jwt, policy(), request("label", PASSWORD), None)
                .await
                .unwrap();
        }
    }

    #[test]
    fn test_login_error_maps_to_api_error() {
        assert!(matches!(
            ApiError::from(LoginError::LockedOut),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from(LoginError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(LoginError::Token(JwtError::InvalidToken)),
            ApiError::Internal(_)
        ));
    }
}
