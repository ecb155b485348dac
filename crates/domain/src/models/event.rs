//! Event (show / party) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub venue: String,
    pub city: String,
    pub country: Option<String>,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub ticket_url: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

/// Rejects an end date earlier than the start date.
pub fn validate_schedule(
    date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (date, end_date) {
        (Some(start), Some(end)) if end < start => {
            let mut err = ValidationError::new("end_before_start");
            err.message = Some("End date cannot be before the event date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Venue must be 1-200 characters"))]
    pub venue: String,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,

    pub date: DateTime<Utc>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub ticket_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "Price must be at most 50 characters"))]
    pub price: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_published")]
    pub published: bool,
}

impl CreateEventRequest {
    pub fn validate_schedule(&self) -> Result<(), ValidationError> {
        validate_schedule(Some(self.date), self.end_date)
    }
}

/// Request payload for updating an event (partial update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Venue must be 1-200 characters"))]
    pub venue: Option<String>,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,

    pub date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub ticket_url: Option<String>,

    #[validate(custom(function = "shared::validation::validate_http_url"))]
    pub image_url: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "Price must be at most 50 characters"))]
    pub price: Option<String>,

    pub featured: Option<bool>,

    pub published: Option<bool>,
}

impl UpdateEventRequest {
    /// Checks the dates carried by this update against each other only.
    pub fn validate_schedule(&self) -> Result<(), ValidationError> {
        validate_schedule(self.date, self.end_date)
    }

    /// Applies the fields present in this update to `event`.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(venue) = self.venue {
            event.venue = venue;
        }
        if let Some(city) = self.city {
            event.city = city;
        }
        if self.country.is_some() {
            event.country = self.country;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if self.end_date.is_some() {
            event.end_date = self.end_date;
        }
        if self.ticket_url.is_some() {
            event.ticket_url = self.ticket_url;
        }
        if self.image_url.is_some() {
            event.image_url = self.image_url;
        }
        if self.description.is_some() {
            event.description = self.description;
        }
        if self.price.is_some() {
            event.price = self.price;
        }
        if let Some(featured) = self.featured {
            event.featured = featured;
        }
        if let Some(published) = self.published {
            event.published = published;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "title": "Group Therapy 600",
            "venue": "Alexandra Palace",
            "city": "London",
            "date": "2026-11-07T20:00:00Z"
        }"#;
        let request: CreateEventRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.validate_schedule().is_ok());
        assert!(request.published);
        assert!(request.end_date.is_none());
    }

    #[test]
    fn test_schedule_rejects_end_before_start() {
        let start = Utc::now();
        assert!(validate_schedule(Some(start), Some(start - Duration::hours(1))).is_err());
        assert!(validate_schedule(Some(start), Some(start + Duration::hours(6))).is_ok());
        assert!(validate_schedule(None, Some(start)).is_ok());
        assert!(validate_schedule(Some(start), None).is_ok());
    }

    #[test]
    fn test_update_moves_date() {
        let now = Utc::now();
        let mut event = Event {
            id: Uuid::new_v4(),
            title: "Warehouse".to_string(),
            venue: "Printworks".to_string(),
            city: "London".to_string(),
            country: Some("UK".to_string()),
            date: now,
            end_date: None,
            ticket_url: None,
            image_url: None,
            description: None,
            price: None,
            featured: false,
            published: true,
            created_at: now,
        };

        let later = now + Duration::days(7);
        UpdateEventRequest {
            date: Some(later),
            price: Some("£35".to_string()),
            ..Default::default()
        }
        .apply_to(&mut event);

        assert_eq!(event.date, later);
        assert_eq!(event.price.as_deref(), Some("£35"));
        assert_eq!(event.venue, "Printworks");
    }
}
