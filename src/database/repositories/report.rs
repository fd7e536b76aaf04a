//! Report repository implementation

use sqlx::PgPool;

use crate::models::report::{ReportCategory, ReportDetailed, SalesDaily};
use crate::utils::errors::AdminError;

#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Daily sales series, oldest first for charting
    pub async fn sales_daily(&self) -> Result<Vec<SalesDaily>, AdminError> {
        let rows = sqlx::query_as::<_, SalesDaily>(
            "SELECT id, date_label, sales, orders, created_at FROM report_sales_daily ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Sales broken down by product category
    pub async fn categories(&self) -> Result<Vec<ReportCategory>, AdminError> {
        let rows = sqlx::query_as::<_, ReportCategory>(
            "SELECT id, category, sales, orders, created_at FROM report_category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Detailed per-day report rows, newest first
    pub async fn detailed(&self) -> Result<Vec<ReportDetailed>, AdminError> {
        let rows = sqlx::query_as::<_, ReportDetailed>(
            "SELECT id, date_label, orders, sales, commission, refunds, created_at FROM report_detailed ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
