//! Contact submission repository.

use domain::models::{CreateContactRequest, UpdateContactRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_all(&self) -> Result<Vec<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_contacts");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, name, email, subject, message, category, status, created_at
            FROM contacts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_by_id");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, name, email, subject, message, category, status, created_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    /// New submissions always start in the `new` status.
    pub async fn create(&self, input: &CreateContactRequest) -> Result<ContactEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            INSERT INTO contacts (name, email, subject, message, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, subject, message, category, status, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(input.resolved_category())
        .fetch_one(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateContactRequest,
    ) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_contact");
        let result = sqlx::query_as::<_, ContactEntity>(
            r#"
            UPDATE contacts
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                subject = COALESCE($4, subject),
                message = COALESCE($5, message),
                category = COALESCE($6, category),
                status = COALESCE($7, status)
            WHERE id = $1
            RETURNING id, name, email, subject, message, category, status, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .bind(&input.category)
        .bind(input.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await;
        timer.finish(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact");
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.finish(result).map(|r| r.rows_affected())
    }
}
