//! Release repository.

use domain::models::{CreateReleaseRequest, UpdateReleaseRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReleaseEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct ReleaseRepository {
    pool: PgPool,
}

impl ReleaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// All releases, newest first.
    pub async fn find_all(&self) -> Result<Vec<ReleaseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_releases");
        let result = sqlx::query_as::<_, ReleaseEntity>(
            r#"
            SELECT id, title, artist_name, release_type, cover_url, release_date, genre,
                   description, spotify_url, apple_music_url, soundcloud_url, beatport_url,
                   featured, published, created_at
            FROM releases
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ReleaseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_release_by_id");
        let result = sqlx::query_as::<_, ReleaseEntity>(
            r#"
            SELECT id, title, artist_name, release_type, cover_url, release_date, genre,
                   description, spotify_url, apple_music_url, soundcloud_url, beatport_url,
                   featured, published, created_at
            FROM releases
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(&self, input: &CreateReleaseRequest) -> Result<ReleaseEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_release");
        let result = sqlx::query_as::<_, ReleaseEntity>(
            r#"
            INSERT INTO releases (title, artist_name, release_type, cover_url, release_date,
                                  genre, description, spotify_url, apple_music_url,
                                  soundcloud_url, beatport_url, featured, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, title, artist_name, release_type, cover_url, release_date, genre,
                      description, spotify_url, apple_music_url, soundcloud_url, beatport_url,
                      featured, published, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.artist_name)
        .bind(input.release_type.as_str())
        .bind(&input.cover_url)
        .bind(input.release_date)
        .bind(&input.genre)
        .bind(&input.description)
        .bind(&input.spotify_url)
        .bind(&input.apple_music_url)
        .bind(&input.soundcloud_url)
        .bind(&input.beatport_url)
        .bind(input.featured)
        .bind(input.published)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Partial update. Returns `None` when no release has this id.
    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateReleaseRequest,
    ) -> Result<Option<ReleaseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_release");
        let result = sqlx::query_as::<_, ReleaseEntity>(
            r#"
            UPDATE releases
            SET title = COALESCE($2, title),
                artist_name = COALESCE($3, artist_name),
                release_type = COALESCE($4, release_type),
                cover_url = COALESCE($5, cover_url),
                release_date = COALESCE($6, release_date),
                genre = COALESCE($7, genre),
                description = COALESCE($8, description),
                spotify_url = COALESCE($9, spotify_url),
                apple_music_url = COALESCE($10, apple_music_url),
                soundcloud_url = COALESCE($11, soundcloud_url),
                beatport_url = COALESCE($12, beatport_url),
                featured = COALESCE($13, featured),
                published = COALESCE($14, published)
            WHERE id = $1
            RETURNING id, title, artist_name, release_type, cover_url, release_date, genre,
                      description, spotify_url, apple_music_url, soundcloud_url, beatport_url,
                      featured, published, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.artist_name)
        .bind(input.release_type.map(|t| t.as_str()))
        .bind(&input.cover_url)
        .bind(input.release_date)
        .bind(&input.genre)
        .bind(&input.description)
        .bind(&input.spotify_url)
        .bind(&input.apple_music_url)
        .bind(&input.soundcloud_url)
        .bind(&input.beatport_url)
        .bind(input.featured)
        .bind(input.published)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_release");
        let result = sqlx::query("DELETE FROM releases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
