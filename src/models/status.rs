//! Status-to-badge mapping
//!
//! Every status enumeration rendered by the admin pages maps onto a badge
//! with a display label and a color tone. The mapping is total: adding a
//! status variant without a badge is a compile error.

use serde::Serialize;

use crate::models::order::{OrderPaymentStatus, OrderStatus};
use crate::models::payment::{TxnStatus, TxnType};
use crate::models::product::ProductStatus;
use crate::models::support::{TicketPriority, TicketStatus};
use crate::models::user::UserStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Primary,
    Success,
    Info,
    Warning,
    Destructive,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

const fn badge(label: &'static str, tone: BadgeTone) -> Badge {
    Badge { label, tone }
}

pub trait StatusBadge {
    fn badge(&self) -> Badge;
}

impl StatusBadge for UserStatus {
    fn badge(&self) -> Badge {
        match self {
            UserStatus::Active => badge("Active", BadgeTone::Success),
            UserStatus::Pending => badge("Pending", BadgeTone::Warning),
            UserStatus::Blocked => badge("Blocked", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for ProductStatus {
    fn badge(&self) -> Badge {
        match self {
            ProductStatus::Pending => badge("Pending", BadgeTone::Warning),
            ProductStatus::Approved => badge("Approved", BadgeTone::Success),
            ProductStatus::Rejected => badge("Rejected", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for OrderStatus {
    fn badge(&self) -> Badge {
        match self {
            OrderStatus::New => badge("New", BadgeTone::Primary),
            OrderStatus::Shipped => badge("Shipped", BadgeTone::Info),
            OrderStatus::Delivered => badge("Delivered", BadgeTone::Success),
            OrderStatus::Cancelled => badge("Cancelled", BadgeTone::Destructive),
            OrderStatus::Refunded => badge("Refunded", BadgeTone::Muted),
        }
    }
}

impl StatusBadge for OrderPaymentStatus {
    fn badge(&self) -> Badge {
        match self {
            OrderPaymentStatus::Paid => badge("Paid", BadgeTone::Success),
            OrderPaymentStatus::Refunded => badge("Refunded", BadgeTone::Muted),
            OrderPaymentStatus::Pending => badge("Pending", BadgeTone::Warning),
        }
    }
}

impl StatusBadge for TxnStatus {
    fn badge(&self) -> Badge {
        match self {
            TxnStatus::Settled => badge("Settled", BadgeTone::Success),
            TxnStatus::Processed => badge("Processed", BadgeTone::Info),
            TxnStatus::Pending => badge("Pending", BadgeTone::Warning),
        }
    }
}

impl StatusBadge for TxnType {
    fn badge(&self) -> Badge {
        match self {
            TxnType::Order => badge("Order", BadgeTone::Success),
            TxnType::Payout => badge("Payout", BadgeTone::Info),
            TxnType::Refund => badge("Refund", BadgeTone::Destructive),
        }
    }
}

impl StatusBadge for TicketStatus {
    fn badge(&self) -> Badge {
        match self {
            TicketStatus::Open => badge("Open", BadgeTone::Warning),
            TicketStatus::InProgress => badge("In Progress", BadgeTone::Info),
            TicketStatus::Resolved => badge("Resolved", BadgeTone::Success),
        }
    }
}

impl StatusBadge for TicketPriority {
    fn badge(&self) -> Badge {
        match self {
            TicketPriority::Low => badge("Low", BadgeTone::Muted),
            TicketPriority::Medium => badge("Medium", BadgeTone::Warning),
            TicketPriority::High => badge("High", BadgeTone::Destructive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_order_status_has_a_badge() {
        for status in [
            OrderStatus::New,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ] {
            assert!(!status.badge().label.is_empty());
        }
    }

    #[test]
    fn every_ticket_status_has_a_badge() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
        ] {
            assert!(!status.badge().label.is_empty());
        }
    }

    #[test]
    fn labels_match_the_admin_pages() {
        assert_eq!(TicketStatus::InProgress.badge().label, "In Progress");
        assert_eq!(UserStatus::Blocked.badge().label, "Blocked");
        assert_eq!(OrderStatus::Refunded.badge().tone, BadgeTone::Muted);
        assert_eq!(TicketPriority::High.badge().tone, BadgeTone::Destructive);
    }

    #[test]
    fn payment_and_txn_badges_agree_on_pending() {
        assert_eq!(OrderPaymentStatus::Pending.badge().label, "Pending");
        assert_eq!(TxnStatus::Pending.badge().label, "Pending");
        assert_eq!(
            OrderPaymentStatus::Pending.badge().tone,
            TxnStatus::Pending.badge().tone
        );
    }
}
