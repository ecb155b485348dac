//! Creates the first admin account on startup when configured.

use domain::models::NewAdminUser;
use domain::{Storage, StorageError};
use shared::password::{hash_password, PasswordError};
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// What [`bootstrap_admin`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    NotConfigured,
    AlreadyExists,
    Created,
}

/// Creates the configured admin unless one with that username exists.
/// Idempotent across restarts.
pub async fn bootstrap_admin(
    storage: &dyn Storage,
    config: &AdminBootstrapConfig,
) -> Result<BootstrapOutcome, BootstrapError> {
    let username = config.bootstrap_username.trim();
    if username.is_empty() {
        return Ok(BootstrapOutcome::NotConfigured);
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "GT__ADMIN__BOOTSTRAP_USERNAME is set but GT__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(BootstrapOutcome::NotConfigured);
    }

    if storage.get_admin_user_by_username(username).await?.is_some() {
        info!(username = %username, "Bootstrap admin already exists - skipping");
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    let password_hash = hash_password(&config.bootstrap_password)?;

    match storage
        .create_admin_user(NewAdminUser::new(username, password_hash))
        .await
    {
        Ok(admin) => {
            info!(admin_id = %admin.id, username = %admin.username, "Bootstrap admin created");
            warn!(
                "Remove GT__ADMIN__BOOTSTRAP_PASSWORD from the environment after initial setup"
            );
            Ok(BootstrapOutcome::Created)
        }
        // Another instance created it between the lookup and the insert.
        Err(StorageError::Conflict(_)) => Ok(BootstrapOutcome::AlreadyExists),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MemStorage;
    use shared::password::verify_password;

    fn config(username: &str, password: &str) -> AdminBootstrapConfig {
        AdminBootstrapConfig {
            bootstrap_username: username.to_string(),
            bootstrap_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_not_configured() {
        let storage = MemStorage::new();
        let outcome = tokio_test::assert_ok!(bootstrap_admin(&storage, &config("", "secret")).await);
        assert_eq!(outcome, BootstrapOutcome::NotConfigured);

        let outcome = tokio_test::assert_ok!(bootstrap_admin(&storage, &config("label", "")).await);
        assert_eq!(outcome, BootstrapOutcome::NotConfigured);
        assert!(storage
            .get_admin_user_by_username("label")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_creates_admin_once() {
        let storage = MemStorage::new();
        let cfg = config("label", "correct horse battery staple");

        assert_eq!(
            bootstrap_admin(&storage, &cfg).await.unwrap(),
            BootstrapOutcome::Created
        );
        assert_eq!(
            bootstrap_admin(&storage, &cfg).await.unwrap(),
            BootstrapOutcome::AlreadyExists
        );

        let admin = storage
            .get_admin_user_by_username("label")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, "admin");
        assert!(verify_password("correct horse battery staple", &admin.password_hash).unwrap());
    }
}
