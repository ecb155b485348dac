//! Radio show repository.

use domain::models::{CreateRadioShowRequest, UpdateRadioShowRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::RadioShowEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct RadioShowRepository {
    pool: PgPool,
}

impl RadioShowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All shows in weekly schedule order; unscheduled shows last.
    pub async fn find_all(&self) -> Result<Vec<RadioShowEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_radio_shows");
        let result = sqlx::query_as::<_, RadioShowEntity>(
            r#"
            SELECT id, title, host_name, description, day_of_week, start_time,
                   duration_minutes, cover_url, stream_url, is_live, created_at
            FROM radio_shows
            ORDER BY day_of_week ASC, start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RadioShowEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_radio_show_by_id");
        let result = sqlx::query_as::<_, RadioShowEntity>(
            r#"
            SELECT id, title, host_name, description, day_of_week, start_time,
                   duration_minutes, cover_url, stream_url, is_live, created_at
            FROM radio_shows
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(
        &self,
        input: &CreateRadioShowRequest,
    ) -> Result<RadioShowEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_radio_show");
        let result = sqlx::query_as::<_, RadioShowEntity>(
            r#"
            INSERT INTO radio_shows (title, host_name, description, day_of_week, start_time,
                                     duration_minutes, cover_url, stream_url, is_live)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, host_name, description, day_of_week, start_time,
                      duration_minutes, cover_url, stream_url, is_live, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.host_name)
        .bind(&input.description)
        .bind(input.day_of_week)
        .bind(&input.start_time)
        .bind(input.duration_minutes)
        .bind(&input.cover_url)
        .bind(&input.stream_url)
        .bind(input.is_live)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateRadioShowRequest,
    ) -> Result<Option<RadioShowEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_radio_show");
        let result = sqlx::query_as::<_, RadioShowEntity>(
            r#"
            UPDATE radio_shows
            SET title = COALESCE($2, title),
                host_name = COALESCE($3, host_name),
                description = COALESCE($4, description),
                day_of_week = COALESCE($5, day_of_week),
                start_time = COALESCE($6, start_time),
                duration_minutes = COALESCE($7, duration_minutes),
                cover_url = COALESCE($8, cover_url),
                stream_url = COALESCE($9, stream_url),
                is_live = COALESCE($10, is_live)
            WHERE id = $1
            RETURNING id, title, host_name, description, day_of_week, start_time,
                      duration_minutes, cover_url, stream_url, is_live, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.host_name)
        .bind(&input.description)
        .bind(input.day_of_week)
        .bind(&input.start_time)
        .bind(input.duration_minutes)
        .bind(&input.cover_url)
        .bind(&input.stream_url)
        .bind(input.is_live)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_radio_show");
        let result = sqlx::query("DELETE FROM radio_shows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
