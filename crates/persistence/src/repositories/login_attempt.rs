//! Login attempt repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::LoginAttemptEntity;
use crate::metrics::QueryTimer;

/// Repository for the admin login audit trail.
#[derive(Clone)]
pub struct LoginAttemptRepository {
    pool: PgPool,
}

impl LoginAttemptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create(
        &self,
        username: &str,
        ip_address: Option<&str>,
        success: bool,
    ) -> Result<LoginAttemptEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_login_attempt");
        let result = sqlx::query_as::<_, LoginAttemptEntity>(
            r#"
            INSERT INTO login_attempts (username, ip_address, success)
            VALUES ($1, $2, $3)
            RETURNING id, username, ip_address, success, attempted_at
            "#,
        )
        .bind(username)
        .bind(ip_address)
        .bind(success)
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    /// Attempts for `username` at or after `since`, newest first.
    pub async fn find_since(
        &self,
        username: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<LoginAttemptEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_recent_login_attempts");
        let result = sqlx::query_as::<_, LoginAttemptEntity>(
            r#"
            SELECT id, username, ip_address, success, attempted_at
            FROM login_attempts
            WHERE username = $1 AND attempted_at >= $2
            ORDER BY attempted_at DESC
            "#,
        )
        .bind(username)
        .bind(since)
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }
}
