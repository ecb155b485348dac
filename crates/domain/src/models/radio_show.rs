//! Radio show domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Default show length in minutes.
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

/// A recurring radio show.
///
/// `day_of_week` counts from Sunday = 0; `start_time` is `HH:MM` in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioShow {
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

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

/// Request payload for creating a radio show.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRadioShowRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Host name must be 1-100 characters"))]
    pub host_name: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6"))]
    pub day_of_week: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_time_of_day"))]
    pub start_time: Option<String>,

    #[serde(default = "default_duration")]
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i32,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub stream_url: Option<String>,

    #[serde(default)]
    pub is_live: bool,
}

/// Request payload for updating a radio show (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRadioShowRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Host name must be 1-100 characters"))]
    pub host_name: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6"))]
    pub day_of_week: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_time_of_day"))]
    pub start_time: Option<String>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub cover_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub stream_url: Option<String>,

    pub is_live: Option<bool>,
}

impl UpdateRadioShowRequest {
    /// Applies the fields present in this update to `show`.
    pub fn apply_to(self, show: &mut RadioShow) {
        if let Some(title) = self.title {
            show.title = title;
        }
        if let Some(host_name) = self.host_name {
            show.host_name = host_name;
        }
        if self.description.is_some() {
            show.description = self.description;
        }
        if self.day_of_week.is_some() {
            show.day_of_week = self.day_of_week;
        }
        if self.start_time.is_some() {
            show.start_time = self.start_time;
        }
        if let Some(duration) = self.duration_minutes {
            show.duration_minutes = duration;
        }
        if self.cover_url.is_some() {
            show.cover_url = self.cover_url;
        }
        if self.stream_url.is_some() {
            show.stream_url = self.stream_url;
        }
        if let Some(is_live) = self.is_live {
            show.is_live = is_live;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let json = r#"{"title": "Group Therapy", "hostName": "Above & Beyond"}"#;
        let request: CreateRadioShowRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.duration_minutes, DEFAULT_DURATION_MINUTES);
        assert!(!request.is_live);
    }

    #[test]
    fn test_create_request_schedule_bounds() {
        let json = r#"{
            "title": "Group Therapy",
            "hostName": "A&B",
            "dayOfWeek": 7,
            "startTime": "25:00",
            "durationMinutes": 0
        }"#;
        let request: CreateRadioShowRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("day_of_week"));
        assert!(fields.contains_key("start_time"));
        assert!(fields.contains_key("duration_minutes"));
    }

    #[test]
    fn test_update_goes_live() {
        let mut show = RadioShow {
            id: Uuid::new_v4(),
            title: "Group Therapy".to_string(),
            host_name: "A&B".to_string(),
            description: None,
            day_of_week: Some(5),
            start_time: Some("19:00".to_string()),
            duration_minutes: 120,
            cover_url: None,
            stream_url: None,
            is_live: false,
            created_at: Utc::now(),
        };

        UpdateRadioShowRequest {
            is_live: Some(true),
            ..Default::default()
        }
        .apply_to(&mut show);

        assert!(show.is_live);
        assert_eq!(show.day_of_week, Some(5));
        assert_eq!(show.duration_minutes, 120);
    }
}
