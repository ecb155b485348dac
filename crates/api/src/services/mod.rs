//! Business services used by the route handlers and at startup.

pub mod admin_bootstrap;
pub mod admin_login;
