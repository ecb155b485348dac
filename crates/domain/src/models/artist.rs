//! Artist domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An artist on the label roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
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

/// Request payload for creating an artist.
///
/// When `slug` is omitted it is derived from the name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 200, message = "Slug must be at most 200 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: Option<String>,

    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub soundcloud_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub instagram_url: Option<String>,

    #[serde(default)]
    pub featured: bool,
}

impl CreateArtistRequest {
    /// The slug to store: the explicit one, or one derived from the name.
    pub fn resolved_slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| shared::validation::slugify(&self.name))
    }
}

/// Request payload for updating an artist (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtistRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Slug must be at most 200 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: Option<String>,

    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub soundcloud_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub instagram_url: Option<String>,

    pub featured: Option<bool>,
}

impl UpdateArtistRequest {
    /// Applies the fields present in this update to `artist`.
    pub fn apply_to(self, artist: &mut Artist) {
        if let Some(name) = self.name {
            artist.name = name;
        }
        if let Some(slug) = self.slug {
            artist.slug = slug;
        }
        if self.bio.is_some() {
            artist.bio = self.bio;
        }
        if self.image_url.is_some() {
            artist.image_url = self.image_url;
        }
        if self.genre.is_some() {
            artist.genre = self.genre;
        }
        if self.spotify_url.is_some() {
            artist.spotify_url = self.spotify_url;
        }
        if self.soundcloud_url.is_some() {
            artist.soundcloud_url = self.soundcloud_url;
        }
        if self.instagram_url.is_some() {
            artist.instagram_url = self.instagram_url;
        }
        if let Some(featured) = self.featured {
            artist.featured = featured;
        }
    }
}
