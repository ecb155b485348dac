//! Radio show entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the radio_shows table.
#[derive(Debug, Clone, FromRow)]
pub struct RadioShowEntity {
    pub id: Uuid,
    pub title: String,
    pub host_name: String,
    pub description: Option<String>,
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub duration_minutes: i32,
    pub cover_url: Option<String>,
    pub stream_url: Option<String>,
    pub is_live: bool,
    pub created_at: DateTime<Utc>,
}

impl From<RadioShowEntity> for domain::models::RadioShow {
    fn from(entity: RadioShowEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            host_name: entity.host_name,
            description: entity.description,
            day_of_week: entity.day_of_week,
            start_time: entity.start_time,
            duration_minutes: entity.duration_minutes,
            cover_url: entity.cover_url,
            stream_url: entity.stream_url,
            is_live: entity.is_live,
            created_at: entity.created_at,
        }
    }
}
