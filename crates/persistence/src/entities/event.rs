//! Event entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
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

impl From<EventEntity> for domain::models::Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            venue: entity.venue,
            city: entity.city,
            country: entity.country,
            date: entity.date,
            end_date: entity.end_date,
            ticket_url: entity.ticket_url,
            image_url: entity.image_url,
            description: entity.description,
            price: entity.price,
            featured: entity.featured,
            published: entity.published,
            created_at: entity.created_at,
        }
    }
}
