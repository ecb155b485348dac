//! Video repository.

use domain::models::{CreateVideoRequest, UpdateVideoRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::VideoEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_all(&self) -> Result<Vec<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_videos");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            SELECT id, title, description, video_url, thumbnail_url, artist_name, category,
                   featured, published_at, created_at
            FROM videos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_video_by_id");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            SELECT id, title, description, video_url, thumbnail_url, artist_name, category,
                   featured, published_at, created_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(&self, input: &CreateVideoRequest) -> Result<VideoEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_video");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            INSERT INTO videos (title, description, video_url, thumbnail_url, artist_name,
                                category, featured, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, video_url, thumbnail_url, artist_name, category,
                      featured, published_at, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.video_url)
        .bind(&input.thumbnail_url)
        .bind(&input.artist_name)
        .bind(&input.category)
        .bind(input.featured)
        .bind(input.published_at)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateVideoRequest,
    ) -> Result<Option<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_video");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            UPDATE videos
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                video_url = COALESCE($4, video_url),
                thumbnail_url = COALESCE($5, thumbnail_url),
                artist_name = COALESCE($6, artist_name),
                category = COALESCE($7, category),
                featured = COALESCE($8, featured),
                published_at = COALESCE($9, published_at)
            WHERE id = $1
            RETURNING id, title, description, video_url, thumbnail_url, artist_name, category,
                      featured, published_at, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.video_url)
        .bind(&input.thumbnail_url)
        .bind(&input.artist_name)
        .bind(&input.category)
        .bind(input.featured)
        .bind(input.published_at)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_video");
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
