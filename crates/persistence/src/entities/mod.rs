//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

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

pub use admin_user::AdminUserEntity;
pub use artist::ArtistEntity;
pub use contact::ContactEntity;
pub use event::EventEntity;
pub use login_attempt::LoginAttemptEntity;
pub use playlist::PlaylistEntity;
pub use post::PostEntity;
pub use radio_show::RadioShowEntity;
pub use release::ReleaseEntity;
pub use user::UserEntity;
pub use video::VideoEntity;
