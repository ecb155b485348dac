//! Artist repository.

use domain::models::{CreateArtistRequest, UpdateArtistRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ArtistEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_all(&self) -> Result<Vec<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_artists");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            SELECT id, name, slug, bio, image_url, genre, spotify_url, soundcloud_url,
                   instagram_url, featured, created_at
            FROM artists
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_artist_by_id");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            SELECT id, name, slug, bio, image_url, genre, spotify_url, soundcloud_url,
                   instagram_url, featured, created_at
            FROM artists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Create an artist. The slug is derived from the name when not given.
    pub async fn create(&self, input: &CreateArtistRequest) -> Result<ArtistEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_artist");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            INSERT INTO artists (name, slug, bio, image_url, genre, spotify_url,
                                 soundcloud_url, instagram_url, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, slug, bio, image_url, genre, spotify_url, soundcloud_url,
                      instagram_url, featured, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.resolved_slug())
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.genre)
        .bind(&input.spotify_url)
        .bind(&input.soundcloud_url)
        .bind(&input.instagram_url)
        .bind(input.featured)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateArtistRequest,
    ) -> Result<Option<ArtistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_artist");
        let result = sqlx::query_as::<_, ArtistEntity>(
            r#"
            UPDATE artists
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                bio = COALESCE($4, bio),
                image_url = COALESCE($5, image_url),
                genre = COALESCE($6, genre),
                spotify_url = COALESCE($7, spotify_url),
                soundcloud_url = COALESCE($8, soundcloud_url),
                instagram_url = COALESCE($9, instagram_url),
                featured = COALESCE($10, featured)
            WHERE id = $1
            RETURNING id, name, slug, bio, image_url, genre, spotify_url, soundcloud_url,
                      instagram_url, featured, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.genre)
        .bind(&input.spotify_url)
        .bind(&input.soundcloud_url)
        .bind(&input.instagram_url)
        .bind(input.featured)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_artist");
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
