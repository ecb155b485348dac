//! Release entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::ReleaseType;
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

/// Database row mapping for the releases table.
#[derive(Debug, Clone, FromRow)]
pub struct ReleaseEntity {
    pub id: Uuid,
    pub title: String,
    pub artist_name: String,
    pub release_type: String,
    pub cover_url: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub spotify_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub soundcloud_url: Option<String>,
    pub beatport_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ReleaseEntity> for domain::models::Release {
    fn from(entity: ReleaseEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            artist_name: entity.artist_name,
            release_type: ReleaseType::from_str(&entity.release_type).unwrap_or_default(),
            cover_url: entity.cover_url,
            release_date: entity.release_date,
            genre: entity.genre,
            description: entity.description,
            spotify_url: entity.spotify_url,
            apple_music_url: entity.apple_music_url,
            soundcloud_url: entity.soundcloud_url,
            beatport_url: entity.beatport_url,
            featured: entity.featured,
            published: entity.published,
            created_at: entity.created_at,
        }
    }
}
