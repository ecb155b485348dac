//! Storage interface for label content and accounts.
//!
//! Every operation maps to exactly one statement against one table in the
//! Postgres implementation. Lookups return `None` when nothing matches;
//! updates return `None` when the id is unknown; deletes report whether a
//! row was removed.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    AdminUser, Artist, Contact, CreateArtistRequest, CreateContactRequest, CreateEventRequest,
    CreatePlaylistRequest, CreatePostRequest, CreateRadioShowRequest, CreateReleaseRequest,
    CreateVideoRequest, Event, LoginAttempt, NewAdminUser, NewLoginAttempt, NewUser, Playlist,
    Post, RadioShow, Release, UpdateArtistRequest, UpdateContactRequest, UpdateEventRequest,
    UpdatePlaylistRequest, UpdatePostRequest, UpdateRadioShowRequest, UpdateReleaseRequest,
    UpdateVideoRequest, User, Video,
};

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A unique constraint was violated (duplicate username or slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A foreign key pointed at a missing row.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The backend could not be reached (pool exhausted, closed, I/O).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Internal(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Cheap round trip used by health checks.
    async fn ping(&self) -> StorageResult<()>;

    // Users
    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> StorageResult<User>;

    // Admin users
    async fn get_admin_user_by_username(&self, username: &str)
        -> StorageResult<Option<AdminUser>>;
    async fn create_admin_user(&self, user: NewAdminUser) -> StorageResult<AdminUser>;
    /// Stamps `last_login_at` and `updated_at` with the current time.
    async fn update_admin_last_login(&self, username: &str) -> StorageResult<()>;

    // Login attempts
    async fn record_login_attempt(&self, attempt: NewLoginAttempt) -> StorageResult<LoginAttempt>;
    /// Attempts for `username` made within the last `minutes` minutes, newest first.
    async fn get_recent_login_attempts(
        &self,
        username: &str,
        minutes: i64,
    ) -> StorageResult<Vec<LoginAttempt>>;

    // Releases
    async fn get_all_releases(&self) -> StorageResult<Vec<Release>>;
    async fn get_release_by_id(&self, id: Uuid) -> StorageResult<Option<Release>>;
    async fn create_release(&self, release: CreateReleaseRequest) -> StorageResult<Release>;
    async fn update_release(
        &self,
        id: Uuid,
        update: UpdateReleaseRequest,
    ) -> StorageResult<Option<Release>>;
    async fn delete_release(&self, id: Uuid) -> StorageResult<bool>;

    // Events
    async fn get_all_events(&self) -> StorageResult<Vec<Event>>;
    async fn get_event_by_id(&self, id: Uuid) -> StorageResult<Option<Event>>;
    async fn create_event(&self, event: CreateEventRequest) -> StorageResult<Event>;
    async fn update_event(&self, id: Uuid, update: UpdateEventRequest)
        -> StorageResult<Option<Event>>;
    async fn delete_event(&self, id: Uuid) -> StorageResult<bool>;

    // Posts
    async fn get_all_posts(&self) -> StorageResult<Vec<Post>>;
    async fn get_post_by_id(&self, id: Uuid) -> StorageResult<Option<Post>>;
    async fn create_post(&self, post: CreatePostRequest) -> StorageResult<Post>;
    async fn update_post(&self, id: Uuid, update: UpdatePostRequest) -> StorageResult<Option<Post>>;
    async fn delete_post(&self, id: Uuid) -> StorageResult<bool>;

    // Contacts
    async fn get_all_contacts(&self) -> StorageResult<Vec<Contact>>;
    async fn get_contact_by_id(&self, id: Uuid) -> StorageResult<Option<Contact>>;
    async fn create_contact(&self, contact: CreateContactRequest) -> StorageResult<Contact>;
    async fn update_contact(
        &self,
        id: Uuid,
        update: UpdateContactRequest,
    ) -> StorageResult<Option<Contact>>;
    async fn delete_contact(&self, id: Uuid) -> StorageResult<bool>;

    // Artists
    async fn get_all_artists(&self) -> StorageResult<Vec<Artist>>;
    async fn get_artist_by_id(&self, id: Uuid) -> StorageResult<Option<Artist>>;
    async fn create_artist(&self, artist: CreateArtistRequest) -> StorageResult<Artist>;
    async fn update_artist(
        &self,
        id: Uuid,
        update: UpdateArtistRequest,
    ) -> StorageResult<Option<Artist>>;
    async fn delete_artist(&self, id: Uuid) -> StorageResult<bool>;

    // Radio shows
    async fn get_all_radio_shows(&self) -> StorageResult<Vec<RadioShow>>;
    async fn get_radio_show_by_id(&self, id: Uuid) -> StorageResult<Option<RadioShow>>;
    async fn create_radio_show(&self, show: CreateRadioShowRequest) -> StorageResult<RadioShow>;
    async fn update_radio_show(
        &self,
        id: Uuid,
        update: UpdateRadioShowRequest,
    ) -> StorageResult<Option<RadioShow>>;
    async fn delete_radio_show(&self, id: Uuid) -> StorageResult<bool>;

    // Playlists
    async fn get_all_playlists(&self) -> StorageResult<Vec<Playlist>>;
    async fn get_playlist_by_id(&self, id: Uuid) -> StorageResult<Option<Playlist>>;
    async fn create_playlist(&self, playlist: CreatePlaylistRequest) -> StorageResult<Playlist>;
    async fn update_playlist(
        &self,
        id: Uuid,
        update: UpdatePlaylistRequest,
    ) -> StorageResult<Option<Playlist>>;
    async fn delete_playlist(&self, id: Uuid) -> StorageResult<bool>;

    // Videos
    async fn get_all_videos(&self) -> StorageResult<Vec<Video>>;
    async fn get_video_by_id(&self, id: Uuid) -> StorageResult<Option<Video>>;
    async fn create_video(&self, video: CreateVideoRequest) -> StorageResult<Video>;
    async fn update_video(&self, id: Uuid, update: UpdateVideoRequest)
        -> StorageResult<Option<Video>>;
    async fn delete_video(&self, id: Uuid) -> StorageResult<bool>;
}
