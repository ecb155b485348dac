//! Domain models for the Group Therapy backend.

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

pub use admin_user::{AdminLoginRequest, AdminLoginResponse, AdminProfile, AdminUser, NewAdminUser};
pub use artist::{Artist, CreateArtistRequest, UpdateArtistRequest};
pub use contact::{Contact, ContactStatus, CreateContactRequest, UpdateContactRequest};
pub use event::{CreateEventRequest, Event, UpdateEventRequest};
pub use login_attempt::{LoginAttempt, NewLoginAttempt};
pub use playlist::{CreatePlaylistRequest, Playlist, UpdatePlaylistRequest};
pub use post::{CreatePostRequest, Post, UpdatePostRequest};
pub use radio_show::{CreateRadioShowRequest, RadioShow, UpdateRadioShowRequest};
pub use release::{CreateReleaseRequest, Release, ReleaseType, UpdateReleaseRequest};
pub use user::{NewUser, User};
pub use video::{CreateVideoRequest, UpdateVideoRequest, Video};
