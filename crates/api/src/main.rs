use std::sync::Arc;

use anyhow::Result;
use domain::{MemStorage, Storage};
use persistence::DatabaseStorage;
use tracing::{info, warn};

use group_therapy_api::{app, config, middleware, services};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting Group Therapy API v{}", env!("CARGO_PKG_VERSION"));

    let storage: Arc<dyn Storage> = if config.database.in_memory {
        warn!("database.in_memory is set - content will not survive a restart");
        Arc::new(MemStorage::new())
    } else {
        let db_config = persistence::db::DatabaseConfig::from(&config.database);
        let pool = persistence::db::create_pool(&db_config).await?;

        info!("Running database migrations...");
        persistence::db::run_migrations(&pool).await?;
        info!("Migrations completed");

        Arc::new(DatabaseStorage::new(pool))
    };

    services::admin_bootstrap::bootstrap_admin(storage.as_ref(), &config.admin).await?;

    let addr = config.socket_addr()?;
    let app = app::create_app(config, storage);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
