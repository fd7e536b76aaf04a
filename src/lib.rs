//! Fixverse Admin Service
//!
//! Backend for the Fixverse marketplace admin dashboard. Serves the page
//! snapshots (dashboard, users, products, orders, payments, support,
//! reports, settings) and the moderation actions behind them, with
//! admin-only access validated against externally issued session tokens.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AdminError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::AppState;
pub use services::AuthService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
