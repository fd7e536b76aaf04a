//! Product catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub product_code: String,
    pub name: String,
    pub seller: String,
    pub category: String,
    pub icon: String,
    pub price: f64,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing review: only pending products can be approved or rejected
pub fn review_transition_allowed(from: ProductStatus, to: ProductStatus) -> bool {
    from == ProductStatus::Pending
        && matches!(to, ProductStatus::Approved | ProductStatus::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_reviewed_either_way() {
        assert!(review_transition_allowed(ProductStatus::Pending, ProductStatus::Approved));
        assert!(review_transition_allowed(ProductStatus::Pending, ProductStatus::Rejected));
    }

    #[test]
    fn settled_reviews_are_final() {
        assert!(!review_transition_allowed(ProductStatus::Approved, ProductStatus::Rejected));
        assert!(!review_transition_allowed(ProductStatus::Rejected, ProductStatus::Approved));
        assert!(!review_transition_allowed(ProductStatus::Approved, ProductStatus::Pending));
    }

    #[test]
    fn pending_is_not_a_review_target() {
        assert!(!review_transition_allowed(ProductStatus::Pending, ProductStatus::Pending));
    }
}
