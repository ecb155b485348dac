//! Contact submission entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::ContactStatus;
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactEntity> for domain::models::Contact {
    fn from(entity: ContactEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            category: entity.category,
            status: ContactStatus::from_str(&entity.status).unwrap_or_default(),
            created_at: entity.created_at,
        }
    }
}
