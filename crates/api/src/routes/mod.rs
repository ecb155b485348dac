//! HTTP route handlers.

pub mod artists;
pub mod auth;
pub mod contacts;
pub mod events;
pub mod health;
pub mod playlists;
pub mod posts;
pub mod radio_shows;
pub mod releases;
pub mod videos;
