//! News post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A news / blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Slug must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_image: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(length(max = 100, message = "Author name must be at most 100 characters"))]
    pub author_name: Option<String>,

    #[serde(default)]
    pub published: bool,

    pub published_at: Option<DateTime<Utc>>,
}

/// Request payload for updating a post (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Slug must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Excerpt must be at most 500 characters"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_image: Option<String>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[validate(length(max = 100, message = "Author name must be at most 100 characters"))]
    pub author_name: Option<String>,

    pub published: Option<bool>,

    pub published_at: Option<DateTime<Utc>>,
}

impl UpdatePostRequest {
    /// Applies the fields present in this update to `post` and stamps
    /// `updated_at`.
    pub fn apply_to(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        if self.excerpt.is_some() {
            post.excerpt = self.excerpt;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if self.cover_image.is_some() {
            post.cover_image = self.cover_image;
        }
        if self.category.is_some() {
            post.category = self.category;
        }
        if self.author_name.is_some() {
            post.author_name = self.author_name;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        if self.published_at.is_some() {
            post.published_at = self.published_at;
        }
        post.updated_at = now;
    }
}
