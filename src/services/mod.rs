//! Services module
//!
//! This module contains business logic services

pub mod auth;

pub use auth::{AuthContext, AuthService, SessionClaims};
