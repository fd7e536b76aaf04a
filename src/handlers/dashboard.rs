//! Dashboard page: headline stats, today's overview, pending approvals
//! and the recent activity feed

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use chrono::{NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::dashboard::{PendingApproval, RecentActivity};
use crate::models::user::AppRole;
use crate::utils::errors::AdminError;
use crate::utils::logging;

const ACTIVITY_FEED_LIMIT: i64 = 8;

#[derive(Debug, Default, Serialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_sellers: i64,
    pub total_orders: i64,
    pub platform_revenue: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct TodayOverview {
    pub new_orders: i64,
    pub order_volume: f64,
    pub new_signups: i64,
    pub support_tickets: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardPageView {
    pub stats: DashboardStats,
    pub today: TodayOverview,
    pub pending_approvals: Vec<PendingApproval>,
    pub recent_activities: Vec<RecentActivity>,
}

#[get("")]
async fn dashboard_page(state: web::Data<AppState>, _admin: AdminUser) -> impl Responder {
    let db = &state.db;
    // midnight UTC marks the start of "today"
    let midnight = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let (
        total_users,
        active_sellers,
        total_orders,
        platform_revenue,
        new_orders,
        order_volume,
        new_signups,
        support_tickets,
        pending_approvals,
        recent_activities,
    ) = tokio::join!(
        db.users.count(),
        db.users.count_by_role(AppRole::Seller),
        db.orders.count(),
        db.payments.settled_order_revenue(),
        db.orders.count_placed_since(midnight),
        db.payments.order_volume_since(midnight),
        db.users.count_created_since(midnight),
        db.support.count_opened_since(midnight),
        db.dashboard.pending_approvals(),
        db.dashboard.recent_activities(ACTIVITY_FEED_LIMIT),
    );

    let stats = DashboardStats {
        total_users: fetch_or_default("dashboard", "profiles", total_users),
        active_sellers: fetch_or_default("dashboard", "user_roles", active_sellers),
        total_orders: fetch_or_default("dashboard", "orders", total_orders),
        platform_revenue: fetch_or_default("dashboard", "transactions", platform_revenue),
    };

    let today = TodayOverview {
        new_orders: fetch_or_default("dashboard", "orders_today", new_orders),
        order_volume: fetch_or_default("dashboard", "order_volume_today", order_volume),
        new_signups: fetch_or_default("dashboard", "signups_today", new_signups),
        support_tickets: fetch_or_default("dashboard", "tickets_today", support_tickets),
    };

    ApiResult::http_success(DashboardPageView {
        stats,
        today,
        pending_approvals: fetch_or_default("dashboard", "pending_approvals", pending_approvals),
        recent_activities: fetch_or_default("dashboard", "recent_activities", recent_activities),
    })
}

async fn decide(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
    approved: bool,
) -> Result<HttpResponse, AdminError> {
    let approval = state.db.decide_approval(id, approved).await?;
    let action = if approved {
        "approval.approve"
    } else {
        "approval.reject"
    };
    logging::log_admin_action(admin.user_id, action, &approval.name);
    Ok(ApiResult::http_success(approval))
}

#[post("/approvals/{id}/approve")]
async fn approve_pending(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    decide(&state, &admin, *path, true).await
}

#[post("/approvals/{id}/reject")]
async fn reject_pending(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    decide(&state, &admin, *path, false).await
}

pub fn routes() -> Scope {
    web::scope("/dashboard")
        .service(dashboard_page)
        .service(approve_pending)
        .service(reject_pending)
}
