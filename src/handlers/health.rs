//! Health probe, reachable without a session

use actix_web::{Responder, get, web};

use crate::database;
use crate::handlers::{ApiResult, AppState};

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    match database::health_check(&state.pool).await {
        Ok(()) => ApiResult::http_success("ok".to_string()),
        Err(err) => ApiResult::http_unavailable(err),
    }
}
