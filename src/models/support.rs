//! Support ticket and FAQ models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_user_type", rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub enum TicketUserType {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SupportTicket {
    pub id: Uuid,
    pub ticket_id: String,
    pub subject: String,
    pub ticket_user: String,
    pub user_type: TicketUserType,
    pub category: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_on: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i32>,
}

/// Legal ticket status transitions: open -> in_progress -> resolved,
/// with resolution allowed straight from open.
pub fn ticket_transition_allowed(from: TicketStatus, to: TicketStatus) -> bool {
    matches!(
        (from, to),
        (TicketStatus::Open, TicketStatus::InProgress)
            | (TicketStatus::Open, TicketStatus::Resolved)
            | (TicketStatus::InProgress, TicketStatus::Resolved)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tickets_can_progress_or_resolve() {
        assert!(ticket_transition_allowed(TicketStatus::Open, TicketStatus::InProgress));
        assert!(ticket_transition_allowed(TicketStatus::Open, TicketStatus::Resolved));
        assert!(ticket_transition_allowed(TicketStatus::InProgress, TicketStatus::Resolved));
    }

    #[test]
    fn resolved_tickets_are_terminal() {
        assert!(!ticket_transition_allowed(TicketStatus::Resolved, TicketStatus::Open));
        assert!(!ticket_transition_allowed(TicketStatus::Resolved, TicketStatus::InProgress));
    }

    #[test]
    fn no_backwards_progress() {
        assert!(!ticket_transition_allowed(TicketStatus::InProgress, TicketStatus::Open));
        assert!(!ticket_transition_allowed(TicketStatus::Open, TicketStatus::Open));
    }
}
