//! Payments repository: transactions, payout requests, commission settings

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::payment::{
    CommissionSetting, CreateTransactionRequest, PayoutRequest, Transaction, TxnType,
};
use crate::utils::errors::AdminError;

const TXN_COLUMNS: &str =
    "id, txn_id, type, order_id, seller, amount, status, txn_date, created_at, updated_at";

const COMMISSION_COLUMNS: &str =
    "id, category, commission, last_updated, created_at, updated_at";

const PAYOUT_COLUMNS: &str =
    "id, request_id, seller, requested_amount, available_balance, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all transactions, most recent first
    pub async fn transactions(&self) -> Result<Vec<Transaction>, AdminError> {
        let txns = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {TXN_COLUMNS} FROM transactions ORDER BY txn_date DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(txns)
    }

    /// Record a new transaction. Takes an executor so money movements
    /// can share a database transaction with their companion writes.
    pub async fn insert_transaction<'e, E>(
        &self,
        executor: E,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, AdminError>
    where
        E: PgExecutor<'e>,
    {
        let txn = sqlx::query_as::<_, Transaction>(&format!(
            r#"
            INSERT INTO transactions (txn_id, type, order_id, seller, amount, status, txn_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TXN_COLUMNS}
            "#
        ))
        .bind(request.txn_id)
        .bind(request.txn_type)
        .bind(request.order_id)
        .bind(request.seller)
        .bind(request.amount)
        .bind(request.status)
        .bind(Utc::now())
        .fetch_one(executor)
        .await?;

        Ok(txn)
    }

    /// Sum transaction amounts of a given type
    pub async fn sum_amount_by_type(&self, txn_type: TxnType) -> Result<f64, AdminError> {
        let sum: (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM transactions WHERE type = $1",
        )
        .bind(txn_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(sum.0)
    }

    /// Platform revenue: settled order transactions only
    pub async fn settled_order_revenue(&self) -> Result<f64, AdminError> {
        let sum: (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM transactions WHERE type = 'order' AND status = 'settled'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(sum.0)
    }

    /// Sum order-transaction amounts recorded at or after the given instant
    pub async fn order_volume_since(&self, since: DateTime<Utc>) -> Result<f64, AdminError> {
        let sum: (f64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM transactions WHERE type = 'order' AND txn_date >= $1",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(sum.0)
    }

    /// List commission settings by category
    pub async fn commission_settings(&self) -> Result<Vec<CommissionSetting>, AdminError> {
        let settings = sqlx::query_as::<_, CommissionSetting>(&format!(
            "SELECT {COMMISSION_COLUMNS} FROM commission_settings ORDER BY category"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Update a category commission rate
    pub async fn update_commission(
        &self,
        id: Uuid,
        commission: f64,
    ) -> Result<CommissionSetting, AdminError> {
        let now = Utc::now();
        let setting = sqlx::query_as::<_, CommissionSetting>(&format!(
            r#"
            UPDATE commission_settings
            SET commission = $2, last_updated = $3, updated_at = $3
            WHERE id = $1
            RETURNING {COMMISSION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(commission)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }

    /// List open payout requests
    pub async fn payout_requests(&self) -> Result<Vec<PayoutRequest>, AdminError> {
        let requests = sqlx::query_as::<_, PayoutRequest>(&format!(
            "SELECT {PAYOUT_COLUMNS} FROM payout_requests ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Find a payout request by ID
    pub async fn find_payout_request(&self, id: Uuid) -> Result<Option<PayoutRequest>, AdminError> {
        let request = sqlx::query_as::<_, PayoutRequest>(&format!(
            "SELECT {PAYOUT_COLUMNS} FROM payout_requests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    /// Remove a payout request once settled. Returns whether a row was
    /// actually removed, so the delete doubles as a concurrency guard.
    pub async fn delete_payout_request<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<bool, AdminError>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM payout_requests WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
