//! Post repository.

use domain::models::{CreatePostRequest, UpdatePostRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PostEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_all(&self) -> Result<Vec<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_posts");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, title, slug, excerpt, content, cover_image, category, author_name,
                   published, published_at, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_post_by_id");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            SELECT id, title, slug, excerpt, content, cover_image, category, author_name,
                   published, published_at, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(&self, input: &CreatePostRequest) -> Result<PostEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_post");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            INSERT INTO posts (title, slug, excerpt, content, cover_image, category,
                               author_name, published, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, slug, excerpt, content, cover_image, category, author_name,
                      published, published_at, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.cover_image)
        .bind(&input.category)
        .bind(&input.author_name)
        .bind(input.published)
        .bind(input.published_at)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Partial update; always bumps `updated_at`.
    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdatePostRequest,
    ) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_post");
        let result = sqlx::query_as::<_, PostEntity>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                cover_image = COALESCE($6, cover_image),
                category = COALESCE($7, category),
                author_name = COALESCE($8, author_name),
                published = COALESCE($9, published),
                published_at = COALESCE($10, published_at),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, excerpt, content, cover_image, category, author_name,
                      published, published_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.cover_image)
        .bind(&input.category)
        .bind(&input.author_name)
        .bind(input.published)
        .bind(input.published_at)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_post");
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
