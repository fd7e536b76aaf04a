//! Error handling for the Fixverse admin backend
//!
//! This module defines the main error type used throughout the application
//! and its mapping onto HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Main error type for the admin backend
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session token error: {0}")]
    SessionToken(#[from] jsonwebtoken::errors::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<config::ConfigError> for AdminError {
    fn from(err: config::ConfigError) -> Self {
        AdminError::Config(err.to_string())
    }
}

/// Result type alias for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

impl ResponseError for AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NotFound { .. } => StatusCode::NOT_FOUND,
            AdminError::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
            AdminError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AdminError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AdminError::SessionToken(_) => StatusCode::UNAUTHORIZED,
            AdminError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "code": status.as_u16(),
            "message": self.to_string(),
            "data": serde_json::Value::Null,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AdminError::NotFound {
            entity: "order",
            id: "OD1234".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("OD1234"));
    }

    #[test]
    fn invalid_transition_maps_to_409() {
        let err = AdminError::InvalidStatusTransition {
            from: "delivered".to_string(),
            to: "new".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_are_internal() {
        let err = AdminError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
