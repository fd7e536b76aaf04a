//! HTTP handlers for the admin pages
//!
//! Each admin page gets its own module exposing `routes() -> Scope`; page
//! views follow the same shape throughout: fetch the snapshot, filter it
//! in-process, and render the rows with their status badges.

pub mod dashboard;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reports;
pub mod settings;
pub mod support;
pub mod users;

use actix_web::{HttpResponse, Scope, http::StatusCode, web};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};
use crate::services::AuthService;
use crate::utils::logging;

/// Shared application state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseService,
    pub auth: AuthService,
    pub settings: Settings,
    pub pool: DatabasePool,
}

impl AppState {
    pub fn new(pool: DatabasePool, settings: Settings) -> Self {
        Self {
            db: DatabaseService::new(pool.clone()),
            auth: AuthService::new(&settings.auth),
            settings,
            pool,
        }
    }
}

/// API result wrapper
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }

    pub fn http_response(status: StatusCode, code: i32, message: String, data: T) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            code,
            message,
            data,
        })
    }
}

impl ApiResult<String> {
    /// Create a service-unavailable response from an error
    pub fn http_unavailable<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::ServiceUnavailable().json(Self {
            code: 503,
            message: "error".to_string(),
            data: err.to_string(),
        })
    }
}

/// Degrade a failed page fetch to the type's default (an empty row set,
/// a zero sum) after logging it. Mutation endpoints do not use this.
pub(crate) fn fetch_or_default<T: Default>(
    page: &str,
    entity: &str,
    result: crate::utils::errors::Result<T>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            logging::log_page_fetch_error(page, entity, &err);
            T::default()
        }
    }
}

/// All admin-gated page routes
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(dashboard::routes())
        .service(users::routes())
        .service(products::routes())
        .service(orders::routes())
        .service(payments::routes())
        .service(support::routes())
        .service(reports::routes())
        .service(settings::routes())
}
