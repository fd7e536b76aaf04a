//! Dashboard repository: pending approvals and the activity feed

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::dashboard::{CreateActivityRequest, PendingApproval, RecentActivity};
use crate::utils::errors::AdminError;

const APPROVAL_COLUMNS: &str = "id, type, name, requested_on, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List pending seller/product approvals, newest request first
    pub async fn pending_approvals(&self) -> Result<Vec<PendingApproval>, AdminError> {
        let approvals = sqlx::query_as::<_, PendingApproval>(&format!(
            "SELECT {APPROVAL_COLUMNS} FROM pending_approvals ORDER BY requested_on DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(approvals)
    }

    /// Find a pending approval by ID
    pub async fn find_approval(&self, id: Uuid) -> Result<Option<PendingApproval>, AdminError> {
        let approval = sqlx::query_as::<_, PendingApproval>(&format!(
            "SELECT {APPROVAL_COLUMNS} FROM pending_approvals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(approval)
    }

    /// Remove a pending approval once decided. Returns whether a row was
    /// removed; a concurrent decision leaves nothing to delete.
    pub async fn delete_approval<'e, E>(&self, executor: E, id: Uuid) -> Result<bool, AdminError>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM pending_approvals WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Most recent platform activities
    pub async fn recent_activities(&self, limit: i64) -> Result<Vec<RecentActivity>, AdminError> {
        let activities = sqlx::query_as::<_, RecentActivity>(
            "SELECT id, activity, activity_user, date_text, created_at FROM recent_activities ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// Append an entry to the activity feed. Takes an executor so the
    /// entry can ride in the same database transaction as the mutation
    /// it describes.
    pub async fn record_activity<'e, E>(
        &self,
        executor: E,
        request: CreateActivityRequest,
    ) -> Result<RecentActivity, AdminError>
    where
        E: PgExecutor<'e>,
    {
        let activity = sqlx::query_as::<_, RecentActivity>(
            r#"
            INSERT INTO recent_activities (activity, activity_user, date_text)
            VALUES ($1, $2, $3)
            RETURNING id, activity, activity_user, date_text, created_at
            "#,
        )
        .bind(request.activity)
        .bind(request.activity_user)
        .bind(request.date_text)
        .fetch_one(executor)
        .await?;

        Ok(activity)
    }
}
