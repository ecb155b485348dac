//! Video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
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

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub video_url: String,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub thumbnail_url: Option<String>,

    #[validate(length(max = 200, message = "Artist name must be at most 200 characters"))]
    pub artist_name: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    pub featured: bool,

    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub video_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub thumbnail_url: Option<String>,

    #[validate(length(max = 200, message = "Artist name must be at most 200 characters"))]
    pub artist_name: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub featured: Option<bool>,

    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateVideoRequest {
    pub fn apply_to(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if self.description.is_some() {
            video.description = self.description;
        }
        if let Some(video_url) = self.video_url {
            video.video_url = video_url;
        }
        if self.thumbnail_url.is_some() {
            video.thumbnail_url = self.thumbnail_url;
        }
        if self.artist_name.is_some() {
            video.artist_name = self.artist_name;
        }
        if self.category.is_some() {
            video.category = self.category;
        }
        if let Some(featured) = self.featured {
            video.featured = featured;
        }
        if self.published_at.is_some() {
            video.published_at = self.published_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_video_url() {
        let json = r#"{"title": "Live at the Gorge"}"#;
        let result: Result<CreateVideoRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_rejects_non_http_video_url() {
        let json = r#"{"title": "Live", "videoUrl": "youtube:abc"}"#;
        let request: CreateVideoRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("video_url"));
    }

    #[test]
    fn test_update_replaces_video_url() {
        let mut video = Video {
            id: Uuid::new_v4(),
            title: "Live".to_string(),
            description: None,
            video_url: "https://youtube.com/watch?v=a".to_string(),
            thumbnail_url: None,
            artist_name: Some("Artist".to_string()),
            category: None,
            featured: false,
            published_at: None,
            created_at: Utc::now(),
        };

        UpdateVideoRequest {
            video_url: Some("https://youtube.com/watch?v=b".to_string()),
            ..Default::default()
        }
        .apply_to(&mut video);

        assert_eq!(video.video_url, "https://youtube.com/watch?v=b");
        assert_eq!(video.artist_name.as_deref(), Some("Artist"));
    }
}
