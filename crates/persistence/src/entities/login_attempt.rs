//! Login attempt entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the login_attempts table.
#[derive(Debug, Clone, FromRow)]
pub struct LoginAttemptEntity {
    pub id: Uuid,
    pub username: String,
    pub ip_address: Option<String>,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}

impl From<LoginAttemptEntity> for domain::models::LoginAttempt {
    fn from(entity: LoginAttemptEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            ip_address: entity.ip_address,
            success: entity.success,
            attempted_at: entity.attempted_at,
        }
    }
}
