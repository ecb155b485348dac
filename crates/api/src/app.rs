//! Router construction and shared application state.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use domain::Storage;
use shared::jwt::JwtConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{
    artists, auth, contacts, events, health, playlists, posts, radio_shows, releases, videos,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let jwt = JwtConfig::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry_secs,
            config.jwt.leeway_secs,
        );
        Self {
            storage,
            config: Arc::new(config),
            jwt: Arc::new(jwt),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the application router.
pub fn create_app(config: Config, storage: Arc<dyn Storage>) -> Router {
    let state = AppState::new(config, storage);
    let config = state.config.clone();

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler))
        .route("/api/admin/login", post(auth::login))
        .route("/api/artists", get(artists::list_artists))
        .route("/api/artists/:id", get(artists::get_artist))
        .route("/api/releases", get(releases::list_releases))
        .route("/api/releases/:id", get(releases::get_release))
        .route("/api/events", get(events::list_events))
        .route("/api/events/:id", get(events::get_event))
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/:id", get(posts::get_post))
        .route("/api/radio-shows", get(radio_shows::list_radio_shows))
        .route("/api/radio-shows/:id", get(radio_shows::get_radio_show))
        .route("/api/playlists", get(playlists::list_playlists))
        .route("/api/playlists/:id", get(playlists::get_playlist))
        .route("/api/videos", get(videos::list_videos))
        .route("/api/videos/:id", get(videos::get_video))
        .route("/api/contacts", post(contacts::submit_contact));

    let admin_routes = Router::new()
        .route("/api/admin/me", get(auth::me))
        .route("/api/artists", post(artists::create_artist))
        .route(
            "/api/artists/:id",
            axum::routing::patch(artists::update_artist).delete(artists::delete_artist),
        )
        .route("/api/releases", post(releases::create_release))
        .route(
            "/api/releases/:id",
            axum::routing::patch(releases::update_release).delete(releases::delete_release),
        )
        .route("/api/events", post(events::create_event))
        .route(
            "/api/events/:id",
            axum::routing::patch(events::update_event).delete(events::delete_event),
        )
        .route("/api/posts", post(posts::create_post))
        .route(
            "/api/posts/:id",
            axum::routing::patch(posts::update_post).delete(posts::delete_post),
        )
        .route("/api/radio-shows", post(radio_shows::create_radio_show))
        .route(
            "/api/radio-shows/:id",
            axum::routing::patch(radio_shows::update_radio_show)
                .delete(radio_shows::delete_radio_show),
        )
        .route("/api/playlists", post(playlists::create_playlist))
        .route(
            "/api/playlists/:id",
            axum::routing::patch(playlists::update_playlist).delete(playlists::delete_playlist),
        )
        .route("/api/videos", post(videos::create_video))
        .route(
            "/api/videos/:id",
            axum::routing::patch(videos::update_video).delete(videos::delete_video),
        )
        .route("/api/contacts", get(contacts::list_contacts))
        .route(
            "/api/contacts/:id",
            get(contacts::get_contact)
                .patch(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security.cors_origins))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Construction must not panic on a malformed entry.
        let _ = cors_layer(&[
            "https://grouptherapy.example".to_string(),
            "not a\norigin".to_string(),
        ]);
    }
}
