//! Users page: buyer/seller listing and account moderation

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::status::{Badge, StatusBadge};
use crate::models::user::{AppRole, UserAccount, UserAction, UserStatus};
use crate::utils::errors::AdminError;
use crate::utils::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTab {
    #[default]
    All,
    Buyers,
    Sellers,
}

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub tab: UserTab,
}

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Option<AppRole>,
    pub status: UserStatus,
    pub status_badge: Badge,
    pub joined_on: DateTime<Utc>,
}

impl From<UserAccount> for UserView {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id,
            name: account.full_name.unwrap_or_default(),
            email: account.email.unwrap_or_default(),
            role: account.role,
            status: account.status,
            status_badge: account.status.badge(),
            joined_on: account.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersPageView {
    pub total: usize,
    pub rows: Vec<UserView>,
}

/// Search matches name or email, case-insensitively; the status selector
/// filters by account standing.
fn matches_filters(account: &UserAccount, search: &str, status: Option<UserStatus>) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || account
            .full_name
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&needle)
        || account
            .email
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&needle);

    let matches_status = status.map_or(true, |wanted| account.status == wanted);

    matches_search && matches_status
}

/// Tabs partition the snapshot by marketplace role
fn in_tab(account: &UserAccount, tab: UserTab) -> bool {
    match tab {
        UserTab::All => true,
        UserTab::Buyers => account.role == Some(AppRole::Buyer),
        UserTab::Sellers => account.role == Some(AppRole::Seller),
    }
}

#[get("")]
async fn list_users(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<UsersQuery>,
) -> impl Responder {
    let accounts = fetch_or_default("users", "profiles", state.db.users.list().await);
    let search = query.search.as_deref().unwrap_or("");

    let rows: Vec<UserView> = accounts
        .into_iter()
        .filter(|account| matches_filters(account, search, query.status))
        .filter(|account| in_tab(account, query.tab))
        .map(UserView::from)
        .collect();

    ApiResult::http_success(UsersPageView {
        total: rows.len(),
        rows,
    })
}

async fn moderate(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
    action: UserAction,
) -> Result<HttpResponse, AdminError> {
    let profile = state.db.moderate_user(id, action).await?;
    logging::log_admin_action(
        admin.user_id,
        &format!("user.{}", action.as_str()),
        &profile.id.to_string(),
    );
    Ok(ApiResult::http_success(profile))
}

#[post("/{id}/verify")]
async fn verify_user(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    moderate(&state, &admin, *path, UserAction::Verify).await
}

#[post("/{id}/reject")]
async fn reject_user(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    moderate(&state, &admin, *path, UserAction::Reject).await
}

#[post("/{id}/block")]
async fn block_user(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    moderate(&state, &admin, *path, UserAction::Block).await
}

#[post("/{id}/unblock")]
async fn unblock_user(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    moderate(&state, &admin, *path, UserAction::Unblock).await
}

pub fn routes() -> Scope {
    web::scope("/users")
        .service(list_users)
        .service(verify_user)
        .service(reject_user)
        .service(block_user)
        .service(unblock_user)
}
