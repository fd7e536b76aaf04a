//! Order repository implementation

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::order::{Order, OrderStatus};
use crate::utils::errors::AdminError;

const ORDER_COLUMNS: &str =
    "id, order_number, buyer, seller, total, payment, status, placed_on, created_at, updated_at";

fn transition_sql() -> String {
    format!(
        r#"
        UPDATE orders
        SET status = $3, updated_at = $4
        WHERE id = $1 AND status = $2
        RETURNING {ORDER_COLUMNS}
        "#
    )
}

fn refund_sql() -> String {
    format!(
        r#"
        UPDATE orders
        SET status = 'refunded', payment = 'refunded', updated_at = $2
        WHERE id = $1 AND status = 'cancelled' AND payment = 'paid'
        RETURNING {ORDER_COLUMNS}
        "#
    )
}

#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all orders, most recently placed first
    pub async fn list(&self) -> Result<Vec<Order>, AdminError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY placed_on DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Find an order by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AdminError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Transition an order's fulfilment status only if it still holds
    /// `from`. Check and write are one statement; `None` means the row
    /// changed underneath the caller.
    pub async fn try_set_status(
        &self,
        id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Option<Order>, AdminError> {
        let order = sqlx::query_as::<_, Order>(&transition_sql())
            .bind(id)
            .bind(from)
            .bind(to)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Mark an order refunded. The state predicate lives in the UPDATE
    /// itself, so only one of two concurrent refunds can win; `None`
    /// means the order is no longer a cancelled, paid order.
    pub async fn mark_refunded<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Order>, AdminError>
    where
        E: PgExecutor<'e>,
    {
        let order = sqlx::query_as::<_, Order>(&refund_sql())
            .bind(id)
            .bind(Utc::now())
            .fetch_optional(executor)
            .await?;

        Ok(order)
    }

    /// Count all orders
    pub async fn count(&self) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count orders placed at or after the given instant
    pub async fn count_placed_since(&self, since: DateTime<Utc>) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE placed_on >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_update_rechecks_current_status() {
        let sql = transition_sql();
        assert!(sql.contains("WHERE id = $1 AND status = $2"));
    }

    #[test]
    fn refund_update_requires_cancelled_paid_order() {
        let sql = refund_sql();
        assert!(sql.contains("WHERE id = $1 AND status = 'cancelled' AND payment = 'paid'"));
        assert!(sql.contains("SET status = 'refunded', payment = 'refunded'"));
    }
}
