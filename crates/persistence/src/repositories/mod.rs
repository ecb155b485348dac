//! Repository implementations for database operations.

pub mod admin_user;
pub mod artist;
pub mod contact;
pub mod event;
pub mod login_attempt;
pub mod playlist;
pub mod post;
pub mod radio_show;
pub mod release;
pub mod user;
pub mod video;

pub use admin_user::AdminUserRepository;
pub use artist::ArtistRepository;
pub use contact::ContactRepository;
pub use event::EventRepository;
pub use login_attempt::LoginAttemptRepository;
pub use playlist::PlaylistRepository;
pub use post::PostRepository;
pub use radio_show::RadioShowRepository;
pub use release::ReleaseRepository;
pub use user::UserRepository;
pub use video::VideoRepository;
