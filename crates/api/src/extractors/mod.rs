//! Request extractors.

pub mod admin_auth;
pub mod client_ip;

pub use admin_auth::CurrentAdmin;
pub use client_ip::ClientIp;
