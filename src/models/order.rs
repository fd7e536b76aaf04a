//! Order models and the order status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderPaymentStatus {
    Paid,
    Refunded,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub buyer: String,
    pub seller: String,
    pub total: f64,
    pub payment: OrderPaymentStatus,
    pub status: OrderStatus,
    pub placed_on: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Legal order status transitions.
///
/// Fulfilment moves new -> shipped -> delivered. Cancellation is allowed
/// before delivery, and a cancelled paid order can be refunded.
pub fn order_transition_allowed(
    from: OrderStatus,
    payment: OrderPaymentStatus,
    to: OrderStatus,
) -> bool {
    match (from, to) {
        (OrderStatus::New, OrderStatus::Shipped) => true,
        (OrderStatus::Shipped, OrderStatus::Delivered) => true,
        (OrderStatus::New, OrderStatus::Cancelled) => true,
        (OrderStatus::Shipped, OrderStatus::Cancelled) => true,
        (OrderStatus::Cancelled, OrderStatus::Refunded) => payment == OrderPaymentStatus::Paid,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fulfilment_path_is_linear() {
        assert!(order_transition_allowed(
            OrderStatus::New,
            OrderPaymentStatus::Paid,
            OrderStatus::Shipped
        ));
        assert!(order_transition_allowed(
            OrderStatus::Shipped,
            OrderPaymentStatus::Paid,
            OrderStatus::Delivered
        ));
        assert!(!order_transition_allowed(
            OrderStatus::New,
            OrderPaymentStatus::Paid,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn cancellation_allowed_before_delivery() {
        assert!(order_transition_allowed(
            OrderStatus::New,
            OrderPaymentStatus::Pending,
            OrderStatus::Cancelled
        ));
        assert!(order_transition_allowed(
            OrderStatus::Shipped,
            OrderPaymentStatus::Paid,
            OrderStatus::Cancelled
        ));
        assert!(!order_transition_allowed(
            OrderStatus::Delivered,
            OrderPaymentStatus::Paid,
            OrderStatus::Cancelled
        ));
    }

    #[test]
    fn refund_requires_cancelled_and_paid() {
        assert!(order_transition_allowed(
            OrderStatus::Cancelled,
            OrderPaymentStatus::Paid,
            OrderStatus::Refunded
        ));
        assert!(!order_transition_allowed(
            OrderStatus::Cancelled,
            OrderPaymentStatus::Pending,
            OrderStatus::Refunded
        ));
        assert!(!order_transition_allowed(
            OrderStatus::Delivered,
            OrderPaymentStatus::Paid,
            OrderStatus::Refunded
        ));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for to in [
            OrderStatus::New,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!order_transition_allowed(
                OrderStatus::Refunded,
                OrderPaymentStatus::Refunded,
                to
            ));
            assert!(!order_transition_allowed(
                OrderStatus::Delivered,
                OrderPaymentStatus::Paid,
                to
            ));
        }
    }
}
