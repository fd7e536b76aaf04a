//! Support repository: tickets and FAQs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::support::{
    CreateFaqRequest, Faq, SupportTicket, TicketStatus, UpdateFaqRequest,
};
use crate::utils::errors::AdminError;

const TICKET_COLUMNS: &str = "id, ticket_id, subject, ticket_user, user_type, category, priority, status, created_on, created_at, updated_at";

const FAQ_COLUMNS: &str = "id, question, answer, sort_order, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct SupportRepository {
    pool: PgPool,
}

impl SupportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all tickets, newest first
    pub async fn tickets(&self) -> Result<Vec<SupportTicket>, AdminError> {
        let tickets = sqlx::query_as::<_, SupportTicket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets ORDER BY created_on DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    /// Find a ticket by ID
    pub async fn find_ticket(&self, id: Uuid) -> Result<Option<SupportTicket>, AdminError> {
        let ticket = sqlx::query_as::<_, SupportTicket>(&format!(
            "SELECT {TICKET_COLUMNS} FROM support_tickets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    /// Update a ticket's resolution status
    pub async fn set_ticket_status(
        &self,
        id: Uuid,
        status: TicketStatus,
    ) -> Result<SupportTicket, AdminError> {
        let ticket = sqlx::query_as::<_, SupportTicket>(&format!(
            r#"
            UPDATE support_tickets
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ticket)
    }

    /// Count tickets opened at or after the given instant
    pub async fn count_opened_since(&self, since: DateTime<Utc>) -> Result<i64, AdminError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM support_tickets WHERE created_on >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// List FAQs in display order
    pub async fn faqs(&self) -> Result<Vec<Faq>, AdminError> {
        let faqs = sqlx::query_as::<_, Faq>(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs ORDER BY sort_order, created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }

    /// Create an FAQ entry
    pub async fn create_faq(&self, request: CreateFaqRequest) -> Result<Faq, AdminError> {
        let faq = sqlx::query_as::<_, Faq>(&format!(
            r#"
            INSERT INTO faqs (question, answer, sort_order)
            VALUES ($1, $2, $3)
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(request.question)
        .bind(request.answer)
        .bind(request.sort_order.unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;

        Ok(faq)
    }

    /// Update an FAQ entry
    pub async fn update_faq(&self, id: Uuid, request: UpdateFaqRequest) -> Result<Faq, AdminError> {
        let faq = sqlx::query_as::<_, Faq>(&format!(
            r#"
            UPDATE faqs
            SET question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                sort_order = COALESCE($4, sort_order),
                updated_at = $5
            WHERE id = $1
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.question)
        .bind(request.answer)
        .bind(request.sort_order)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(faq)
    }
}
