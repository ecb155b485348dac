//! Translation of `sqlx` failures into `StorageError`.

use domain::StorageError;
use tracing::warn;

/// SQLSTATE for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => StorageError::Conflict(
                db_err
                    .constraint()
                    .map(|c| format!("Duplicate value violates {}", c))
                    .unwrap_or_else(|| "Resource already exists".into()),
            ),
            Some(FOREIGN_KEY_VIOLATION) => {
                StorageError::InvalidReference("Referenced resource not found".into())
            }
            _ => StorageError::Internal(format!("Database error: {}", db_err)),
        },
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            warn!(error = %err, "Database unavailable");
            StorageError::Unavailable(err.to_string())
        }
        _ => StorageError::Internal(format!("Database error: {}", err)),
    }
}
