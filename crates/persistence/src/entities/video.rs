//! Video entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the videos table.
#[derive(Debug, Clone, FromRow)]
pub struct VideoEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub artist_name: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<VideoEntity> for domain::models::Video {
    fn from(entity: VideoEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            video_url: entity.video_url,
            thumbnail_url: entity.thumbnail_url,
            artist_name: entity.artist_name,
            category: entity.category,
            featured: entity.featured,
            published_at: entity.published_at,
            created_at: entity.created_at,
        }
    }
}
