//! Curated playlist domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A playlist curated by the label on a streaming service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
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

/// Request payload for creating a playlist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub apple_music_url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 10000, message = "Track count must be between 0 and 10000"))]
    pub track_count: i32,

    #[serde(default)]
    pub featured: bool,
}

/// Request payload for updating a playlist (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub apple_music_url: Option<String>,

    #[validate(range(min = 0, max = 10000, message = "Track count must be between 0 and 10000"))]
    pub track_count: Option<i32>,

    pub featured: Option<bool>,
}

impl UpdatePlaylistRequest {
    /// Applies the fields present in this update to `playlist`.
    pub fn apply_to(self, playlist: &mut Playlist) {
        if let Some(title) = self.title {
            playlist.title = title;
        }
        if self.description.is_some() {
            playlist.description = self.description;
        }
        if self.cover_url.is_some() {
            playlist.cover_url = self.cover_url;
        }
        if self.spotify_url.is_some() {
            playlist.spotify_url = self.spotify_url;
        }
        if self.apple_music_url.is_some() {
            playlist.apple_music_url = self.apple_music_url;
        }
        if let Some(track_count) = self.track_count {
            playlist.track_count = track_count;
        }
        if let Some(featured) = self.featured {
            playlist.featured = featured;
        }
    }
}
