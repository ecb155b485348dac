//! Postgres implementation of the `Storage` trait.

use async_trait::async_trait;
use chrono::Utc;
use domain::models::{
    login_attempt, AdminUser, Artist, Contact, CreateArtistRequest, CreateContactRequest, CreateEventRequest,
    CreatePlaylistRequest, CreatePostRequest, CreateRadioShowRequest, CreateReleaseRequest,
    CreateVideoRequest, Event, LoginAttempt, NewAdminUser, NewLoginAttempt, NewUser, Playlist,
    Post, RadioShow, Release, UpdateArtistRequest, UpdateContactRequest, UpdateEventRequest,
    UpdatePlaylistRequest, UpdatePostRequest, UpdateRadioShowRequest, UpdateReleaseRequest,
    UpdateVideoRequest, User, Video,
};
use domain::{Storage, StorageResult};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::map_sqlx_error;
use crate::metrics::{record_pool_metrics, QueryTimer};
use crate::repositories::{
    AdminUserRepository, ArtistRepository, ContactRepository, EventRepository,
    LoginAttemptRepository, PlaylistRepository, PostRepository, RadioShowRepository,
    ReleaseRepository, UserRepository, VideoRepository,
};

/// `Storage` backed by a Postgres pool, one repository per table.
#[derive(Clone)]
pub struct DatabaseStorage {
    pool: PgPool,
    users: UserRepository,
    admin_users: AdminUserRepository,
    login_attempts: LoginAttemptRepository,
    releases: ReleaseRepository,
    events: EventRepository,
    posts: PostRepository,
    contacts: ContactRepository,
    artists: ArtistRepository,
    radio_shows: RadioShowRepository,
    playlists: PlaylistRepository,
    videos: VideoRepository,
}

impl DatabaseStorage {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            admin_users: AdminUserRepository::new(pool.clone()),
            login_attempts: LoginAttemptRepository::new(pool.clone()),
            releases: ReleaseRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool.clone()),
            artists: ArtistRepository::new(pool.clone()),
            radio_shows: RadioShowRepository::new(pool.clone()),
            playlists: PlaylistRepository::new(pool.clone()),
            videos: VideoRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn ping(&self) -> StorageResult<()> {
        record_pool_metrics(&self.pool);
        let timer = QueryTimer::new("ping");
        let result = sqlx::query("SELECT 1").execute(&self.pool).await;
        timer.finish(result).map(|_| ()).map_err(map_sqlx_error)
    }

    // Users

    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        let entity = self.users.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let entity = self
            .users
            .find_by_username(username)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        let entity = self
            .users
            .create(&user.username, &user.password_hash)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    // Admin users

    async fn get_admin_user_by_username(
        &self,
        username: &str,
    ) -> StorageResult<Option<AdminUser>> {
        let entity = self
            .admin_users
            .find_by_username(username)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_admin_user(&self, user: NewAdminUser) -> StorageResult<AdminUser> {
        let entity = self
            .admin_users
            .create(&user.username, &user.password_hash, &user.role)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_admin_last_login(&self, username: &str) -> StorageResult<()> {
        let updated = self
            .admin_users
            .update_last_login(username)
            .await
            .map_err(map_sqlx_error)?;
        if updated == 0 {
            debug!(username = %username, "No admin row to stamp last login");
        }
        Ok(())
    }

    // Login attempts

    async fn record_login_attempt(&self, attempt: NewLoginAttempt) -> StorageResult<LoginAttempt> {
        let entity = self
            .login_attempts
            .create(
                &attempt.username,
                attempt.ip_address.as_deref(),
                attempt.success,
            )
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn get_recent_login_attempts(
        &self,
        username: &str,
        minutes: i64,
    ) -> StorageResult<Vec<LoginAttempt>> {
        let since = login_attempt::window_start(Utc::now(), minutes);
        let entities = self
            .login_attempts
            .find_since(username, since)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    // Releases

    async fn get_all_releases(&self) -> StorageResult<Vec<Release>> {
        let entities = self.releases.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_release_by_id(&self, id: Uuid) -> StorageResult<Option<Release>> {
        let entity = self.releases.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_release(&self, release: CreateReleaseRequest) -> StorageResult<Release> {
        let entity = self.releases.create(&release).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_release(
        &self,
        id: Uuid,
        update: UpdateReleaseRequest,
    ) -> StorageResult<Option<Release>> {
        let entity = self
            .releases
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_release(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.releases.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Events

    async fn get_all_events(&self) -> StorageResult<Vec<Event>> {
        let entities = self.events.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_event_by_id(&self, id: Uuid) -> StorageResult<Option<Event>> {
        let entity = self.events.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_event(&self, event: CreateEventRequest) -> StorageResult<Event> {
        let entity = self.events.create(&event).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_event(
        &self,
        id: Uuid,
        update: UpdateEventRequest,
    ) -> StorageResult<Option<Event>> {
        let entity = self
            .events
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_event(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.events.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Posts

    async fn get_all_posts(&self) -> StorageResult<Vec<Post>> {
        let entities = self.posts.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_post_by_id(&self, id: Uuid) -> StorageResult<Option<Post>> {
        let entity = self.posts.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_post(&self, post: CreatePostRequest) -> StorageResult<Post> {
        let entity = self.posts.create(&post).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_post(&self, id: Uuid, update: UpdatePostRequest) -> StorageResult<Option<Post>> {
        let entity = self
            .posts
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_post(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.posts.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Contacts

    async fn get_all_contacts(&self) -> StorageResult<Vec<Contact>> {
        let entities = self.contacts.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_contact_by_id(&self, id: Uuid) -> StorageResult<Option<Contact>> {
        let entity = self.contacts.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_contact(&self, contact: CreateContactRequest) -> StorageResult<Contact> {
        let entity = self.contacts.create(&contact).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_contact(
        &self,
        id: Uuid,
        update: UpdateContactRequest,
    ) -> StorageResult<Option<Contact>> {
        let entity = self
            .contacts
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_contact(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.contacts.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Artists

    async fn get_all_artists(&self) -> StorageResult<Vec<Artist>> {
        let entities = self.artists.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_artist_by_id(&self, id: Uuid) -> StorageResult<Option<Artist>> {
        let entity = self.artists.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_artist(&self, artist: CreateArtistRequest) -> StorageResult<Artist> {
        let entity = self.artists.create(&artist).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_artist(
        &self,
        id: Uuid,
        update: UpdateArtistRequest,
    ) -> StorageResult<Option<Artist>> {
        let entity = self
            .artists
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_artist(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.artists.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Radio shows

    async fn get_all_radio_shows(&self) -> StorageResult<Vec<RadioShow>> {
        let entities = self.radio_shows.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_radio_show_by_id(&self, id: Uuid) -> StorageResult<Option<RadioShow>> {
        let entity = self
            .radio_shows
            .find_by_id(id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_radio_show(&self, show: CreateRadioShowRequest) -> StorageResult<RadioShow> {
        let entity = self
            .radio_shows
            .create(&show)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_radio_show(
        &self,
        id: Uuid,
        update: UpdateRadioShowRequest,
    ) -> StorageResult<Option<RadioShow>> {
        let entity = self
            .radio_shows
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_radio_show(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.radio_shows.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Playlists

    async fn get_all_playlists(&self) -> StorageResult<Vec<Playlist>> {
        let entities = self.playlists.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_playlist_by_id(&self, id: Uuid) -> StorageResult<Option<Playlist>> {
        let entity = self.playlists.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_playlist(&self, playlist: CreatePlaylistRequest) -> StorageResult<Playlist> {
        let entity = self
            .playlists
            .create(&playlist)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_playlist(
        &self,
        id: Uuid,
        update: UpdatePlaylistRequest,
    ) -> StorageResult<Option<Playlist>> {
        let entity = self
            .playlists
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_playlist(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.playlists.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }

    // Videos

    async fn get_all_videos(&self) -> StorageResult<Vec<Video>> {
        let entities = self.videos.find_all().await.map_err(map_sqlx_error)?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn get_video_by_id(&self, id: Uuid) -> StorageResult<Option<Video>> {
        let entity = self.videos.find_by_id(id).await.map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn create_video(&self, video: CreateVideoRequest) -> StorageResult<Video> {
        let entity = self.videos.create(&video).await.map_err(map_sqlx_error)?;
        Ok(entity.into())
    }

    async fn update_video(
        &self,
        id: Uuid,
        update: UpdateVideoRequest,
    ) -> StorageResult<Option<Video>> {
        let entity = self
            .videos
            .update(id, &update)
            .await
            .map_err(map_sqlx_error)?;
        Ok(entity.map(Into::into))
    }

    async fn delete_video(&self, id: Uuid) -> StorageResult<bool> {
        let deleted = self.videos.delete(id).await.map_err(map_sqlx_error)?;
        Ok(deleted > 0)
    }
}
