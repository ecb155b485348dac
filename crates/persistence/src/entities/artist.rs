//! Artist entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the artists table.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub genre: Option<String>,
    pub spotify_url: Option<String>,
    pub soundcloud_url: Option<String>,
    pub instagram_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ArtistEntity> for domain::models::Artist {
    fn from(entity: ArtistEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            bio: entity.bio,
            image_url: entity.image_url,
            genre: entity.genre,
            spotify_url: entity.spotify_url,
            soundcloud_url: entity.soundcloud_url,
            instagram_url: entity.instagram_url,
            featured: entity.featured,
            created_at: entity.created_at,
        }
    }
}
