//! Playlist entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the playlists table.
#[derive(Debug, Clone, FromRow)]
pub struct PlaylistEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub spotify_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub track_count: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PlaylistEntity> for domain::models::Playlist {
    fn from(entity: PlaylistEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            cover_url: entity.cover_url,
            spotify_url: entity.spotify_url,
            apple_music_url: entity.apple_music_url,
            track_count: entity.track_count,
            featured: entity.featured,
            created_at: entity.created_at,
        }
    }
}
