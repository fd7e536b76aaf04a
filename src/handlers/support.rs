//! Support page: ticket queue with quick stats, ticket status updates
//! and FAQ management

use actix_web::{HttpResponse, Responder, Scope, get, post, put, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::status::{Badge, StatusBadge};
use crate::models::support::{
    CreateFaqRequest, SupportTicket, TicketPriority, TicketStatus, UpdateFaqRequest,
};
use crate::utils::errors::AdminError;
use crate::utils::logging;

#[derive(Debug, Deserialize)]
pub struct SupportQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tab: Option<TicketStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTicketStatusRequest {
    pub status: TicketStatus,
}

#[derive(Debug, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: SupportTicket,
    pub priority_badge: Badge,
    pub status_badge: Badge,
}

impl From<SupportTicket> for TicketView {
    fn from(ticket: SupportTicket) -> Self {
        let priority_badge = ticket.priority.badge();
        let status_badge = ticket.status.badge();
        Self {
            ticket,
            priority_badge,
            status_badge,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct TicketStats {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub high_priority: usize,
}

#[derive(Debug, Serialize)]
pub struct SupportPageView {
    pub stats: TicketStats,
    pub total: usize,
    pub tickets: Vec<TicketView>,
    pub faqs: Vec<crate::models::support::Faq>,
}

/// Quick stats are computed over the whole queue, before search and tab
/// filters are applied. High priority counts only unresolved tickets.
fn ticket_stats(tickets: &[SupportTicket]) -> TicketStats {
    let mut stats = TicketStats::default();
    for ticket in tickets {
        match ticket.status {
            TicketStatus::Open => stats.open += 1,
            TicketStatus::InProgress => stats.in_progress += 1,
            TicketStatus::Resolved => stats.resolved += 1,
        }
        if ticket.priority == TicketPriority::High && ticket.status != TicketStatus::Resolved {
            stats.high_priority += 1;
        }
    }
    stats
}

/// Search matches ticket id, subject or user; the category selector
/// matches case-insensitively.
fn matches_filters(ticket: &SupportTicket, search: &str, category: Option<&str>) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || ticket.ticket_id.to_lowercase().contains(&needle)
        || ticket.subject.to_lowercase().contains(&needle)
        || ticket.ticket_user.to_lowercase().contains(&needle);

    let matches_category = category.map_or(true, |c| ticket.category.eq_ignore_ascii_case(c));

    matches_search && matches_category
}

fn in_tab(ticket: &SupportTicket, tab: Option<TicketStatus>) -> bool {
    tab.map_or(true, |wanted| ticket.status == wanted)
}

#[get("")]
async fn support_page(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<SupportQuery>,
) -> impl Responder {
    let support = &state.db.support;
    let (tickets, faqs) = tokio::join!(support.tickets(), support.faqs());

    let tickets = fetch_or_default("support", "support_tickets", tickets);
    let stats = ticket_stats(&tickets);
    let total = tickets.len();

    let search = query.search.as_deref().unwrap_or("");
    let rows: Vec<TicketView> = tickets
        .into_iter()
        .filter(|t| matches_filters(t, search, query.category.as_deref()) && in_tab(t, query.tab))
        .map(TicketView::from)
        .collect();

    ApiResult::http_success(SupportPageView {
        stats,
        total,
        tickets: rows,
        faqs: fetch_or_default("support", "faqs", faqs),
    })
}

#[post("/tickets/{id}/status")]
async fn update_ticket_status(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTicketStatusRequest>,
) -> Result<HttpResponse, AdminError> {
    let ticket = state.db.transition_ticket(*path, body.status).await?;
    logging::log_admin_action(admin.user_id, "ticket.status", &ticket.ticket_id);
    Ok(ApiResult::http_success(TicketView::from(ticket)))
}

#[post("/faqs")]
async fn create_faq(
    state: web::Data<AppState>,
    admin: AdminUser,
    body: web::Json<CreateFaqRequest>,
) -> Result<HttpResponse, AdminError> {
    if body.question.trim().is_empty() || body.answer.trim().is_empty() {
        return Err(AdminError::InvalidInput(
            "faq question and answer must not be empty".to_string(),
        ));
    }
    let faq = state.db.support.create_faq(body.into_inner()).await?;
    logging::log_admin_action(admin.user_id, "faq.create", &faq.question);
    Ok(ApiResult::http_success(faq))
}

#[put("/faqs/{id}")]
async fn update_faq(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateFaqRequest>,
) -> Result<HttpResponse, AdminError> {
    let faq = state.db.support.update_faq(*path, body.into_inner()).await?;
    logging::log_admin_action(admin.user_id, "faq.update", &faq.question);
    Ok(ApiResult::http_success(faq))
}

pub fn routes() -> Scope {
    web::scope("/support")
        .service(support_page)
        .service(update_ticket_status)
        .service(create_faq)
        .service(update_faq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::support::TicketUserType;
    use chrono::Utc;

    fn ticket(
        ticket_id: &str,
        subject: &str,
        priority: TicketPriority,
        status: TicketStatus,
    ) -> SupportTicket {
        SupportTicket {
            id: Uuid::new_v4(),
            ticket_id: ticket_id.to_string(),
            subject: subject.to_string(),
            ticket_user: "Amit Patel".to_string(),
            user_type: TicketUserType::Buyer,
            category: "Orders".to_string(),
            priority,
            status,
            created_on: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn stats_count_by_status() {
        let tickets = vec![
            ticket("TK101", "Refund not received", TicketPriority::High, TicketStatus::Open),
            ticket("TK102", "Damaged item", TicketPriority::High, TicketStatus::InProgress),
            ticket("TK103", "Login issue", TicketPriority::Low, TicketStatus::Resolved),
            ticket("TK104", "Wrong item", TicketPriority::High, TicketStatus::Resolved),
        ];
        let stats = ticket_stats(&tickets);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 2);
        // resolved high-priority tickets drop out of the urgent count
        assert_eq!(stats.high_priority, 2);
    }

    #[test]
    fn search_covers_id_subject_and_user() {
        let t = ticket("TK105", "Payout delayed", TicketPriority::Medium, TicketStatus::Open);
        assert!(matches_filters(&t, "tk105", None));
        assert!(matches_filters(&t, "payout", None));
        assert!(matches_filters(&t, "amit", None));
        assert!(!matches_filters(&t, "gst", None));
    }

    #[test]
    fn category_selector_is_case_insensitive() {
        let t = ticket("TK107", "Refund pending", TicketPriority::Low, TicketStatus::Open);
        assert!(matches_filters(&t, "", Some("orders")));
        assert!(matches_filters(&t, "", Some("Orders")));
        assert!(!matches_filters(&t, "", Some("Payments")));
    }

    #[test]
    fn tab_partitions_by_status() {
        let t = ticket("TK106", "Invoice copy", TicketPriority::Low, TicketStatus::InProgress);
        assert!(in_tab(&t, None));
        assert!(in_tab(&t, Some(TicketStatus::InProgress)));
        assert!(!in_tab(&t, Some(TicketStatus::Open)));
    }
}
