//! Release domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Format of a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    #[default]
    Single,
    Ep,
    Album,
    Compilation,
}

impl ReleaseType {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Single => "single",
            ReleaseType::Ep => "ep",
            ReleaseType::Album => "album",
            ReleaseType::Compilation => "compilation",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(ReleaseType::Single),
            "ep" => Ok(ReleaseType::Ep),
            "album" => Ok(ReleaseType::Album),
            "compilation" => Ok(ReleaseType::Compilation),
            other => Err(format!("unknown release type: {}", other)),
        }
    }
}

/// A catalogue release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: Uuid,
    pub title: String,
    pub artist_name: String,
    pub release_type: ReleaseType,
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

fn default_published() -> bool {
    true
}

/// Request payload for creating a release.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReleaseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Artist name must be 1-200 characters"))]
    pub artist_name: String,

    #[serde(default)]
    pub release_type: ReleaseType,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    pub release_date: Option<DateTime<Utc>>,

    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub apple_music_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub soundcloud_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub beatport_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_published")]
    pub published: bool,
}

/// Request payload for updating a release (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReleaseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Artist name must be 1-200 characters"))]
    pub artist_name: Option<String>,

    pub release_type: Option<ReleaseType>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    pub release_date: Option<DateTime<Utc>>,

    #[validate(length(max = 100, message = "Genre must be at most 100 characters"))]
    pub genre: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub spotify_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub apple_music_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub soundcloud_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub beatport_url: Option<String>,

    pub featured: Option<bool>,

    pub published: Option<bool>,
}

impl UpdateReleaseRequest {
    /// Applies the fields present in this update to `release`.
    pub fn apply_to(self, release: &mut Release) {
        if let Some(title) = self.title {
            release.title = title;
        }
        if let Some(artist_name) = self.artist_name {
            release.artist_name = artist_name;
        }
        if let Some(release_type) = self.release_type {
            release.release_type = release_type;
        }
        if self.cover_url.is_some() {
            release.cover_url = self.cover_url;
        }
        if self.release_date.is_some() {
            release.release_date = self.release_date;
        }
        if self.genre.is_some() {
            release.genre = self.genre;
        }
        if self.description.is_some() {
            release.description = self.description;
        }
        if self.spotify_url.is_some() {
            release.spotify_url = self.spotify_url;
        }
        if self.apple_music_url.is_some() {
            release.apple_music_url = self.apple_music_url;
        }
        if self.soundcloud_url.is_some() {
            release.soundcloud_url = self.soundcloud_url;
        }
        if self.beatport_url.is_some() {
            release.beatport_url = self.beatport_url;
        }
        if let Some(featured) = self.featured {
            release.featured = featured;
        }
        if let Some(published) = self.published {
            release.published = published;
        }
    }
}
