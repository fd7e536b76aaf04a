//! HTTP middleware

pub mod auth;

pub use auth::{AdminUser, Authentication, LOGIN_PATH};
