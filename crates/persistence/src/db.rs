//! Database connection pool management.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("src/migrations");

/// Hosts whose managed Postgres only accepts TLS connections.
const TLS_REQUIRED_HOSTS: &[&str] = &["supabase", "neon"];

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Returns true when the URL points at a hosted provider that needs TLS.
pub fn requires_tls(url: &str) -> bool {
    TLS_REQUIRED_HOSTS.iter().any(|host| url.contains(host))
}

/// Parses the URL into connect options.
///
/// Hosted providers get `sslmode=require`: traffic is encrypted but the
/// certificate chain is not verified. Other URLs keep their own settings.
pub fn connect_options(url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(url)?;
    if requires_tls(url) {
        debug!("Hosted database detected, requiring TLS");
        Ok(options.ssl_mode(PgSslMode::Require))
    } else {
        Ok(options)
    }
}

/// Creates a PostgreSQL connection pool with the given configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(connect_options(&config.url)?)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool created"
    );
    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
