//! Event repository.

use domain::models::{CreateEventRequest, UpdateEventRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All events in date order, soonest first.
    pub async fn find_all(&self) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_events");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, venue, city, country, date, end_date, ticket_url, image_url,
                   description, price, featured, published, created_at
            FROM events
            ORDER BY date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, venue, city, country, date, end_date, ticket_url, image_url,
                   description, price, featured, published, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(&self, input: &CreateEventRequest) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, venue, city, country, date, end_date, ticket_url,
                                image_url, description, price, featured, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, title, venue, city, country, date, end_date, ticket_url, image_url,
                      description, price, featured, published, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.venue)
        .bind(&input.city)
        .bind(&input.country)
        .bind(input.date)
        .bind(input.end_date)
        .bind(&input.ticket_url)
        .bind(&input.image_url)
        .bind(&input.description)
        .bind(&input.price)
        .bind(input.featured)
        .bind(input.published)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateEventRequest,
    ) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                venue = COALESCE($3, venue),
                city = COALESCE($4, city),
                country = COALESCE($5, country),
                date = COALESCE($6, date),
                end_date = COALESCE($7, end_date),
                ticket_url = COALESCE($8, ticket_url),
                image_url = COALESCE($9, image_url),
                description = COALESCE($10, description),
                price = COALESCE($11, price),
                featured = COALESCE($12, featured),
                published = COALESCE($13, published)
            WHERE id = $1
            RETURNING id, title, venue, city, country, date, end_date, ticket_url, image_url,
                      description, price, featured, published, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.venue)
        .bind(&input.city)
        .bind(&input.country)
        .bind(input.date)
        .bind(input.end_date)
        .bind(&input.ticket_url)
        .bind(&input.image_url)
        .bind(&input.description)
        .bind(&input.price)
        .bind(input.featured)
        .bind(input.published)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
