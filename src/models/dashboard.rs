//! Dashboard models: pending approvals and the activity feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "approval_type", rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub enum ApprovalType {
    Seller,
    Product,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PendingApproval {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub approval_type: ApprovalType,
    pub name: String,
    pub requested_on: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentActivity {
    pub id: Uuid,
    pub activity: String,
    pub activity_user: String,
    pub date_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    pub activity: String,
    pub activity_user: String,
    pub date_text: String,
}
