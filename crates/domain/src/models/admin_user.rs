//! Admin account models and the admin login payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Role given to admins created without an explicit one.
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

/// An account allowed into the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Data required to insert an admin. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl NewAdminUser {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role: DEFAULT_ADMIN_ROLE.to_string(),
        }
    }
}

/// Admin login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, max = 1024, message = "Password is required"))]
    pub password: String,
}

/// Public view of an admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<AdminUser> for AdminProfile {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            role: admin.role,
            last_login_at: admin.last_login_at,
        }
    }
}

/// Successful admin login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub admin: AdminProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_admin_user_default_role() {
        let admin = NewAdminUser::new("label", "$argon2id$hash");
        assert_eq!(admin.role, DEFAULT_ADMIN_ROLE);
    }

    #[test]
    fn test_login_request_validation() {
        let ok = AdminLoginRequest {
            username: "label".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = AdminLoginRequest {
            username: String::new(),
            password: String::new(),
        };
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_profile_hides_hash() {
        let now = Utc::now();
        let admin = AdminUser {
            id: Uuid::new_v4(),
            username: "label".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: "admin".to_string(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        let json = serde_json::to_string(&AdminProfile::from(admin.clone())).unwrap();
        assert!(!json.contains("argon2"));

        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("lastLoginAt"));
    }
}
