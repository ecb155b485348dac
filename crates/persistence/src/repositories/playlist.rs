//! Playlist repository.

use domain::models::{CreatePlaylistRequest, UpdatePlaylistRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PlaylistEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct PlaylistRepository {
    pool: PgPool,
}

impl PlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_all(&self) -> Result<Vec<PlaylistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_playlists");
        let result = sqlx::query_as::<_, PlaylistEntity>(
            r#"
            SELECT id, title, description, cover_url, spotify_url, apple_music_url,
                   track_count, featured, created_at
            FROM playlists
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PlaylistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_playlist_by_id");
        let result = sqlx::query_as::<_, PlaylistEntity>(
            r#"
            SELECT id, title, description, cover_url, spotify_url, apple_music_url,
                   track_count, featured, created_at
            FROM playlists
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
        input: &CreatePlaylistRequest,
    ) -> Result<PlaylistEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_playlist");
        let result = sqlx::query_as::<_, PlaylistEntity>(
            r#"
            INSERT INTO playlists (title, description, cover_url, spotify_url,
                                   apple_music_url, track_count, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, cover_url, spotify_url, apple_music_url,
                      track_count, featured, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.cover_url)
        .bind(&input.spotify_url)
        .bind(&input.apple_music_url)
        .bind(input.track_count)
        .bind(input.featured)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdatePlaylistRequest,
    ) -> Result<Option<PlaylistEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_playlist");
        let result = sqlx::query_as::<_, PlaylistEntity>(
            r#"
            UPDATE playlists
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                cover_url = COALESCE($4, cover_url),
                spotify_url = COALESCE($5, spotify_url),
                apple_music_url = COALESCE($6, apple_music_url),
                track_count = COALESCE($7, track_count),
                featured = COALESCE($8, featured)
            WHERE id = $1
            RETURNING id, title, description, cover_url, spotify_url, apple_music_url,
                      track_count, featured, created_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.cover_url)
        .bind(&input.spotify_url)
        .bind(&input.apple_music_url)
        .bind(input.track_count)
        .bind(input.featured)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_playlist");
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
