//! Admin account repository.

use sqlx::PgPool;

use crate::entities::AdminUserEntity;
use crate::metrics::QueryTimer;

/// Repository for label administrator accounts.
#[derive(Clone)]
pub struct AdminUserRepository {
    pool: PgPool,
}

impl AdminUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_user_by_username");
        let result = sqlx::query_as::<_, AdminUserEntity>(
            r#"
            SELECT id, username, password_hash, role, created_at, updated_at, last_login_at
            FROM admin_users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<AdminUserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_admin_user");
        let result = sqlx::query_as::<_, AdminUserEntity>(
            r#"
            INSERT INTO admin_users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at, updated_at, last_login_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Stamp the last successful login. Unknown usernames touch no rows.
    pub async fn update_last_login(&self, username: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_admin_last_login");
        let result = sqlx::query(
            r#"
            UPDATE admin_users
            SET last_login_at = NOW(), updated_at = NOW()
            WHERE username = $1
            "#,
        )
        .bind(username)
        .execute(&self.pool)
        .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
