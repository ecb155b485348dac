//! In-memory `Storage` used for local development and tests.
//!
//! Mirrors the Postgres backend's observable behaviour: store-generated ids
//! and timestamps, the same list ordering, partial updates, and `Conflict`
//! on duplicate usernames and slugs.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    contact::ContactStatus, login_attempt, AdminUser, Artist, Contact, CreateArtistRequest, CreateContactRequest,
    CreateEventRequest, CreatePlaylistRequest, CreatePostRequest, CreateRadioShowRequest,
    CreateReleaseRequest, CreateVideoRequest, Event, LoginAttempt, NewAdminUser, NewLoginAttempt,
    NewUser, Playlist, Post, RadioShow, Release, UpdateArtistRequest, UpdateContactRequest,
    UpdateEventRequest, UpdatePlaylistRequest, UpdatePostRequest, UpdateRadioShowRequest,
    UpdateReleaseRequest, UpdateVideoRequest, User, Video,
};
use crate::storage::{Storage, StorageError, StorageResult};

trait Row: Clone {
    fn id(&self) -> Uuid;
}

macro_rules! impl_row {
    ($($ty:ty),* $(,)?) => {
        $(impl Row for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
        })*
    };
}

impl_row!(User, AdminUser, LoginAttempt, Release, Event, Post, Contact, Artist, RadioShow, Playlist, Video);

fn find<T: Row>(rows: &[T], id: Uuid) -> Option<T> {
    rows.iter().find(|r| r.id() == id).cloned()
}

fn remove<T: Row>(rows: &mut Vec<T>, id: Uuid) -> bool {
    let before = rows.len();
    rows.retain(|r| r.id() != id);
    rows.len() != before
}

/// Rows newest first; ties keep the later insert first.
fn newest_first<T: Row, K: Ord>(rows: &[T], created_at: impl Fn(&T) -> K) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    admin_users: Vec<AdminUser>,
    login_attempts: Vec<LoginAttempt>,
    releases: Vec<Release>,
    events: Vec<Event>,
    posts: Vec<Post>,
    contacts: Vec<Contact>,
    artists: Vec<Artist>,
    radio_shows: Vec<RadioShow>,
    playlists: Vec<Playlist>,
    videos: Vec<Video>,
}

/// Process-local storage backed by vectors behind a single lock.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        Ok(find(&self.tables.read().await.users, id))
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> StorageResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::Conflict("Username already exists".into()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_admin_user_by_username(
        &self,
        username: &str,
    ) -> StorageResult<Option<AdminUser>> {
        let tables = self.tables.read().await;
        Ok(tables
            .admin_users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_admin_user(&self, user: NewAdminUser) -> StorageResult<AdminUser> {
        let mut tables = self.tables.write().await;
        if tables.admin_users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::Conflict("Admin username already exists".into()));
        }

        let now = Utc::now();
        let admin = AdminUser {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        tables.admin_users.push(admin.clone());
        Ok(admin)
    }

    async fn update_admin_last_login(&self, username: &str) -> StorageResult<()> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        for admin in tables.admin_users.iter_mut().filter(|u| u.username == username) {
            admin.last_login_at = Some(now);
            admin.updated_at = now;
        }
        Ok(())
    }

    async fn record_login_attempt(&self, attempt: NewLoginAttempt) -> StorageResult<LoginAttempt> {
        let attempt = LoginAttempt {
            id: Uuid::new_v4(),
            username: attempt.username,
            ip_address: attempt.ip_address,
            success: attempt.success,
            attempted_at: Utc::now(),
        };
        self.tables.write().await.login_attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn get_recent_login_attempts(
        &self,
        username: &str,
        minutes: i64,
    ) -> StorageResult<Vec<LoginAttempt>> {
        let cutoff = login_attempt::window_start(Utc::now(), minutes);
        let tables = self.tables.read().await;
        let recent: Vec<LoginAttempt> = tables
            .login_attempts
            .iter()
            .filter(|a| a.username == username && a.attempted_at >= cutoff)
            .cloned()
            .collect();
        Ok(newest_first(&recent, |a| a.attempted_at))
    }

    async fn get_all_releases(&self) -> StorageResult<Vec<Release>> {
        Ok(newest_first(&self.tables.read().await.releases, |r| r.created_at))
    }

    async fn get_release_by_id(&self, id: Uuid) -> StorageResult<Option<Release>> {
        Ok(find(&self.tables.read().await.releases, id))
    }

    async fn create_release(&self, release: CreateReleaseRequest) -> StorageResult<Release> {
        let release = Release {
            id: Uuid::new_v4(),
            title: release.title,
            artist_name: release.artist_name,
            release_type: release.release_type,
            cover_url: release.cover_url,
            release_date: release.release_date,
            genre: release.genre,
            description: release.description,
            spotify_url: release.spotify_url,
            apple_music_url: release.apple_music_url,
            soundcloud_url: release.soundcloud_url,
            beatport_url: release.beatport_url,
            featured: release.featured,
            published: release.published,
            created_at: Utc::now(),
        };
        self.tables.write().await.releases.push(release.clone());
        Ok(release)
    }

    async fn update_release(
        &self,
        id: Uuid,
        update: UpdateReleaseRequest,
    ) -> StorageResult<Option<Release>> {
        let mut tables = self.tables.write().await;
        Ok(tables.releases.iter_mut().find(|r| r.id == id).map(|r| {
            update.apply_to(r);
            r.clone()
        }))
    }

    async fn delete_release(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.releases, id))
    }

    async fn get_all_events(&self) -> StorageResult<Vec<Event>> {
        let mut events = self.tables.read().await.events.clone();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    async fn get_event_by_id(&self, id: Uuid) -> StorageResult<Option<Event>> {
        Ok(find(&self.tables.read().await.events, id))
    }

    async fn create_event(&self, event: CreateEventRequest) -> StorageResult<Event> {
        let event = Event {
            id: Uuid::new_v4(),
            title: event.title,
            venue: event.venue,
            city: event.city,
            country: event.country,
            date: event.date,
            end_date: event.end_date,
            ticket_url: event.ticket_url,
            image_url: event.image_url,
            description: event.description,
            price: event.price,
            featured: event.featured,
            published: event.published,
            created_at: Utc::now(),
        };
        self.tables.write().await.events.push(event.clone());
        Ok(event)
    }

    async fn update_event(
        &self,
        id: Uuid,
        update: UpdateEventRequest,
    ) -> StorageResult<Option<Event>> {
        let mut tables = self.tables.write().await;
        Ok(tables.events.iter_mut().find(|e| e.id == id).map(|e| {
            update.apply_to(e);
            e.clone()
        }))
    }

    async fn delete_event(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.events, id))
    }

    async fn get_all_posts(&self) -> StorageResult<Vec<Post>> {
        Ok(newest_first(&self.tables.read().await.posts, |p| p.created_at))
    }

    async fn get_post_by_id(&self, id: Uuid) -> StorageResult<Option<Post>> {
        Ok(find(&self.tables.read().await.posts, id))
    }

    async fn create_post(&self, post: CreatePostRequest) -> StorageResult<Post> {
        let mut tables = self.tables.write().await;
        if tables.posts.iter().any(|p| p.slug == post.slug) {
            return Err(StorageError::Conflict("Post slug already exists".into()));
        }

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            category: post.category,
            author_name: post.author_name,
            published: post.published,
            published_at: post.published_at,
            created_at: now,
            updated_at: now,
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, update: UpdatePostRequest) -> StorageResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        if !tables.posts.iter().any(|p| p.id == id) {
            return Ok(None);
        }
        if let Some(slug) = &update.slug {
            if tables.posts.iter().any(|p| p.id != id && &p.slug == slug) {
                return Err(StorageError::Conflict("Post slug already exists".into()));
            }
        }

        Ok(tables.posts.iter_mut().find(|p| p.id == id).map(|p| {
            update.apply_to(p, Utc::now());
            p.clone()
        }))
    }

    async fn delete_post(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.posts, id))
    }

    async fn get_all_contacts(&self) -> StorageResult<Vec<Contact>> {
        Ok(newest_first(&self.tables.read().await.contacts, |c| c.created_at))
    }

    async fn get_contact_by_id(&self, id: Uuid) -> StorageResult<Option<Contact>> {
        Ok(find(&self.tables.read().await.contacts, id))
    }

    async fn create_contact(&self, contact: CreateContactRequest) -> StorageResult<Contact> {
        let category = contact.resolved_category().to_string();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            category,
            status: ContactStatus::New,
            created_at: Utc::now(),
        };
        self.tables.write().await.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: Uuid,
        update: UpdateContactRequest,
    ) -> StorageResult<Option<Contact>> {
        let mut tables = self.tables.write().await;
        Ok(tables.contacts.iter_mut().find(|c| c.id == id).map(|c| {
            update.apply_to(c);
            c.clone()
        }))
    }

    async fn delete_contact(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.contacts, id))
    }

    async fn get_all_artists(&self) -> StorageResult<Vec<Artist>> {
        Ok(newest_first(&self.tables.read().await.artists, |a| a.created_at))
    }

    async fn get_artist_by_id(&self, id: Uuid) -> StorageResult<Option<Artist>> {
        Ok(find(&self.tables.read().await.artists, id))
    }

    async fn create_artist(&self, artist: CreateArtistRequest) -> StorageResult<Artist> {
        let slug = artist.resolved_slug();
        let mut tables = self.tables.write().await;
        if tables.artists.iter().any(|a| a.slug == slug) {
            return Err(StorageError::Conflict("Artist slug already exists".into()));
        }

        let artist = Artist {
            id: Uuid::new_v4(),
            name: artist.name,
            slug,
            bio: artist.bio,
            image_url: artist.image_url,
            genre: artist.genre,
            spotify_url: artist.spotify_url,
            soundcloud_url: artist.soundcloud_url,
            instagram_url: artist.instagram_url,
            featured: artist.featured,
            created_at: Utc::now(),
        };
        tables.artists.push(artist.clone());
        debug!(artist_id = %artist.id, slug = %artist.slug, "Artist stored in memory");
        Ok(artist)
    }

    async fn update_artist(
        &self,
        id: Uuid,
        update: UpdateArtistRequest,
    ) -> StorageResult<Option<Artist>> {
        let mut tables = self.tables.write().await;
        if !tables.artists.iter().any(|a| a.id == id) {
            return Ok(None);
        }
        if let Some(slug) = &update.slug {
            if tables.artists.iter().any(|a| a.id != id && &a.slug == slug) {
                return Err(StorageError::Conflict("Artist slug already exists".into()));
            }
        }

        Ok(tables.artists.iter_mut().find(|a| a.id == id).map(|a| {
            update.apply_to(a);
            a.clone()
        }))
    }

    async fn delete_artist(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.artists, id))
    }

    async fn get_all_radio_shows(&self) -> StorageResult<Vec<RadioShow>> {
        let mut shows = self.tables.read().await.radio_shows.clone();
        // Postgres sorts NULLs last in ascending order.
        shows.sort_by(|a, b| {
            (a.day_of_week.is_none(), a.day_of_week, a.start_time.is_none(), &a.start_time).cmp(&(
                b.day_of_week.is_none(),
                b.day_of_week,
                b.start_time.is_none(),
                &b.start_time,
            ))
        });
        Ok(shows)
    }

    async fn get_radio_show_by_id(&self, id: Uuid) -> StorageResult<Option<RadioShow>> {
        Ok(find(&self.tables.read().await.radio_shows, id))
    }

    async fn create_radio_show(&self, show: CreateRadioShowRequest) -> StorageResult<RadioShow> {
        let show = RadioShow {
            id: Uuid::new_v4(),
            title: show.title,
            host_name: show.host_name,
            description: show.description,
            day_of_week: show.day_of_week,
            start_time: show.start_time,
            duration_minutes: show.duration_minutes,
            cover_url: show.cover_url,
            stream_url: show.stream_url,
            is_live: show.is_live,
            created_at: Utc::now(),
        };
        self.tables.write().await.radio_shows.push(show.clone());
        Ok(show)
    }

    async fn update_radio_show(
        &self,
        id: Uuid,
        update: UpdateRadioShowRequest,
    ) -> StorageResult<Option<RadioShow>> {
        let mut tables = self.tables.write().await;
        Ok(tables.radio_shows.iter_mut().find(|s| s.id == id).map(|s| {
            update.apply_to(s);
            s.clone()
        }))
    }

    async fn delete_radio_show(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.radio_shows, id))
    }

    async fn get_all_playlists(&self) -> StorageResult<Vec<Playlist>> {
        Ok(newest_first(&self.tables.read().await.playlists, |p| p.created_at))
    }

    async fn get_playlist_by_id(&self, id: Uuid) -> StorageResult<Option<Playlist>> {
        Ok(find(&self.tables.read().await.playlists, id))
    }

    async fn create_playlist(&self, playlist: CreatePlaylistRequest) -> StorageResult<Playlist> {
        let playlist = Playlist {
            id: Uuid::new_v4(),
            title: playlist.title,
            description: playlist.description,
            cover_url: playlist.cover_url,
            spotify_url: playlist.spotify_url,
            apple_music_url: playlist.apple_music_url,
            track_count: playlist.track_count,
            featured: playlist.featured,
            created_at: Utc::now(),
        };
        self.tables.write().await.playlists.push(playlist.clone());
        Ok(playlist)
    }

    async fn update_playlist(
        &self,
        id: Uuid,
        update: UpdatePlaylistRequest,
    ) -> StorageResult<Option<Playlist>> {
        let mut tables = self.tables.write().await;
        Ok(tables.playlists.iter_mut().find(|p| p.id == id).map(|p| {
            update.apply_to(p);
            p.clone()
        }))
    }

    async fn delete_playlist(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.playlists, id))
    }

    async fn get_all_videos(&self) -> StorageResult<Vec<Video>> {
        Ok(newest_first(&self.tables.read().await.videos, |v| v.created_at))
    }

    async fn get_video_by_id(&self, id: Uuid) -> StorageResult<Option<Video>> {
        Ok(find(&self.tables.read().await.videos, id))
    }

    async fn create_video(&self, video: CreateVideoRequest) -> StorageResult<Video> {
        let video = Video {
            id: Uuid::new_v4(),
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            artist_name: video.artist_name,
            category: video.category,
            featured: video.featured,
            published_at: video.published_at,
            created_at: Utc::now(),
        };
        self.tables.write().await.videos.push(video.clone());
        Ok(video)
    }

    async fn update_video(
        &self,
        id: Uuid,
        update: UpdateVideoRequest,
    ) -> StorageResult<Option<Video>> {
        let mut tables = self.tables.write().await;
        Ok(tables.videos.iter_mut().find(|v| v.id == id).map(|v| {
            update.apply_to(v);
            v.clone()
        }))
    }

    async fn delete_video(&self, id: Uuid) -> StorageResult<bool> {
        Ok(remove(&mut self.tables.write().await.videos, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReleaseType;
    use chrono::{DateTime, Duration, TimeZone};

    fn release(title: &str) -> CreateReleaseRequest {
        CreateReleaseRequest {
            title: title.to_string(),
            artist_name: "Above & Beyond".to_string(),
            release_type: ReleaseType::Album,
            cover_url: None,
            release_date: None,
            genre: None,
            description: None,
            spotify_url: None,
            apple_music_url: None,
            soundcloud_url: None,
            beatport_url: None,
            featured: false,
            published: true,
        }
    }

    fn event(title: &str, date: DateTime<Utc>) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            venue: "Venue".to_string(),
            city: "London".to_string(),
            country: None,
            date,
            end_date: None,
            ticket_url: None,
            image_url: None,
            description: None,
            price: None,
            featured: false,
            published: true,
        }
    }

    fn artist(name: &str, slug: Option<&str>) -> CreateArtistRequest {
        CreateArtistRequest {
            name: name.to_string(),
            slug: slug.map(str::to_string),
            bio: None,
            image_url: None,
            genre: None,
            spotify_url: None,
            soundcloud_url: None,
            instagram_url: None,
            featured: false,
        }
    }

    fn post(slug: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: "News".to_string(),
            slug: slug.to_string(),
            excerpt: None,
            content: "Body".to_string(),
            cover_image: None,
            category: None,
            author_name: None,
            published: false,
            published_at: None,
        }
    }

    fn show(title: &str, day: Option<i32>, start: Option<&str>) -> CreateRadioShowRequest {
        CreateRadioShowRequest {
            title: title.to_string(),
            host_name: "Host".to_string(),
            description: None,
            day_of_week: day,
            start_time: start.map(str::to_string),
            duration_minutes: 60,
            cover_url: None,
            stream_url: None,
            is_live: false,
        }
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let storage = MemStorage::new();
        let user = storage
            .create_user(NewUser {
                username: "listener".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(storage.get_user(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(
            storage.get_user_by_username("listener").await.unwrap(),
            Some(user)
        );
        assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
        assert!(storage.get_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let storage = MemStorage::new();
        let new = || NewUser {
            username: "dup".to_string(),
            password_hash: "hash".to_string(),
        };
        storage.create_user(new()).await.unwrap();
        let err = storage.create_user(new()).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_admin_last_login() {
        let storage = MemStorage::new();
        let admin = storage
            .create_admin_user(NewAdminUser::new("label", "hash"))
            .await
            .unwrap();
        assert!(admin.last_login_at.is_none());

        storage.update_admin_last_login("label").await.unwrap();

        let admin = storage
            .get_admin_user_by_username("label")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.last_login_at.is_some());
        assert!(admin.updated_at >= admin.created_at);

        // Unknown usernames are a no-op.
        storage.update_admin_last_login("ghost").await.unwrap();
    }

    #[tokio::test]
    async fn test_recent_login_attempts_filtered_by_username_and_window() {
        let storage = MemStorage::new();
        for success in [false, false, true] {
            storage
                .record_login_attempt(NewLoginAttempt {
                    username: "label".to_string(),
                    ip_address: None,
                    success,
                })
                .await
                .unwrap();
        }
        storage
            .record_login_attempt(NewLoginAttempt {
                username: "other".to_string(),
                ip_address: Some("198.51.100.1".to_string()),
                success: false,
            })
            .await
            .unwrap();

        // Age one attempt past the window.
        {
            let mut tables = storage.tables.write().await;
            tables.login_attempts[0].attempted_at = Utc::now() - Duration::minutes(30);
        }

        let recent = storage.get_recent_login_attempts("label", 15).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent.iter().all(|a| a.username == "label"));
        assert!(recent[0].attempted_at >= recent[1].attempted_at);

        let all = storage.get_recent_login_attempts("label", 60).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_recent_login_attempts_with_huge_window() {
        let storage = MemStorage::new();
        storage
            .record_login_attempt(NewLoginAttempt {
                username: "label".to_string(),
                ip_address: None,
                success: false,
            })
            .await
            .unwrap();

        let all = storage
            .get_recent_login_attempts("label", 1_000_000_000_000)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);

        let none = storage
            .get_recent_login_attempts("label", i64::MIN)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_release_crud() {
        let storage = MemStorage::new();
        let first = storage.create_release(release("Tri-State")).await.unwrap();
        let second = storage.create_release(release("Group Therapy")).await.unwrap();

        let all = storage.get_all_releases().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id, "newest release first");

        let updated = storage
            .update_release(
                first.id,
                UpdateReleaseRequest {
                    featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.featured);
        assert_eq!(updated.title, "Tri-State");
        assert_eq!(storage.get_release_by_id(first.id).await.unwrap(), Some(updated));

        assert!(storage.delete_release(first.id).await.unwrap());
        assert!(!storage.delete_release(first.id).await.unwrap());
        assert!(storage.get_release_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let storage = MemStorage::new();
        let result = storage
            .update_video(Uuid::new_v4(), UpdateVideoRequest::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_events_sorted_by_date() {
        let storage = MemStorage::new();
        let late = Utc.with_ymd_and_hms(2026, 12, 31, 22, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2026, 6, 1, 20, 0, 0).unwrap();
        storage.create_event(event("NYE", late)).await.unwrap();
        storage.create_event(event("Summer", early)).await.unwrap();

        let titles: Vec<String> = storage
            .get_all_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Summer", "NYE"]);
    }

    #[tokio::test]
    async fn test_artist_slug_derivation_and_conflict() {
        let storage = MemStorage::new();
        let created = storage
            .create_artist(artist("Above & Beyond", None))
            .await
            .unwrap();
        assert_eq!(created.slug, "above-beyond");

        let err = storage
            .create_artist(artist("Other", Some("above-beyond")))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));

        let other = storage
            .create_artist(artist("Other", Some("other")))
            .await
            .unwrap();
        let err = storage
            .update_artist(
                other.id,
                UpdateArtistRequest {
                    slug: Some("above-beyond".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));

        // Re-saving an artist's own slug is fine.
        let same = storage
            .update_artist(
                created.id,
                UpdateArtistRequest {
                    slug: Some("above-beyond".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(same.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_id_with_taken_slug_returns_none() {
        let storage = MemStorage::new();
        storage
            .create_artist(artist("Taken", Some("taken")))
            .await
            .unwrap();
        storage.create_post(post("taken")).await.unwrap();

        let artist = storage
            .update_artist(
                Uuid::new_v4(),
                UpdateArtistRequest {
                    slug: Some("taken".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(artist.is_none());

        let post = storage
            .update_post(
                Uuid::new_v4(),
                UpdatePostRequest {
                    slug: Some("taken".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(post.is_none());
    }

    #[tokio::test]
    async fn test_post_slug_conflict_and_updated_at() {
        let storage = MemStorage::new();
        let created = storage.create_post(post("news")).await.unwrap();
        assert!(matches!(
            storage.create_post(post("news")).await,
            Err(StorageError::Conflict(_))
        ));

        let updated = storage
            .update_post(
                created.id,
                UpdatePostRequest {
                    published: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.published);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_contact_defaults() {
        let storage = MemStorage::new();
        let contact = storage
            .create_contact(CreateContactRequest {
                name: "Fan".to_string(),
                email: "fan@example.com".to_string(),
                subject: None,
                message: "Love the show".to_string(),
                category: None,
            })
            .await
            .unwrap();
        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.category, "general");

        let updated = storage
            .update_contact(
                contact.id,
                UpdateContactRequest {
                    status: Some(ContactStatus::Archived),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, ContactStatus::Archived);
        assert_eq!(storage.get_all_contacts().await.unwrap().len(), 1);
        assert!(storage.delete_contact(contact.id).await.unwrap());
        assert!(storage.get_all_contacts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_radio_shows_schedule_order() {
        let storage = MemStorage::new();
        storage.create_radio_show(show("Unscheduled", None, None)).await.unwrap();
        storage
            .create_radio_show(show("Friday late", Some(5), Some("22:00")))
            .await
            .unwrap();
        storage
            .create_radio_show(show("Friday early", Some(5), Some("19:00")))
            .await
            .unwrap();
        storage
            .create_radio_show(show("Monday", Some(1), Some("12:00")))
            .await
            .unwrap();

        let titles: Vec<String> = storage
            .get_all_radio_shows()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Monday", "Friday early", "Friday late", "Unscheduled"]
        );
    }

    #[tokio::test]
    async fn test_playlist_and_video_crud() {
        let storage = MemStorage::new();
        let playlist = storage
            .create_playlist(CreatePlaylistRequest {
                title: "Weekly".to_string(),
                description: None,
                cover_url: None,
                spotify_url: None,
                apple_music_url: None,
                track_count: 30,
                featured: true,
            })
            .await
            .unwrap();
        assert_eq!(
            storage.get_playlist_by_id(playlist.id).await.unwrap(),
            Some(playlist.clone())
        );
        assert!(storage.delete_playlist(playlist.id).await.unwrap());

        let video = storage
            .create_video(CreateVideoRequest {
                title: "Live".to_string(),
                description: None,
                video_url: "https://youtube.com/watch?v=x".to_string(),
                thumbnail_url: None,
                artist_name: None,
                category: None,
                featured: false,
                published_at: None,
            })
            .await
            .unwrap();
        assert_eq!(storage.get_all_videos().await.unwrap(), vec![video.clone()]);
        assert!(storage.delete_video(video.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_many_contacts_round_trip() {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;
        use fake::Fake;

        let storage = MemStorage::new();
        let mut ids = Vec::new();
        for _ in 0..20 {
            let contact = storage
                .create_contact(CreateContactRequest {
                    name: Name().fake(),
                    email: SafeEmail().fake(),
                    subject: None,
                    message: "Hello".to_string(),
                    category: None,
                })
                .await
                .unwrap();
            ids.push(contact.id);
        }

        let all = storage.get_all_contacts().await.unwrap();
        assert_eq!(all.len(), 20);
        for id in ids {
            let contact = storage.get_contact_by_id(id).await.unwrap().unwrap();
            assert_eq!(contact.status, ContactStatus::New);
            assert_eq!(contact.category, "general");
        }
    }
}
