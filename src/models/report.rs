//! Report rows backing the Reports page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesDaily {
    pub id: Uuid,
    pub date_label: String,
    pub sales: f64,
    pub orders: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportCategory {
    pub id: Uuid,
    pub category: String,
    pub sales: f64,
    pub orders: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportDetailed {
    pub id: Uuid,
    pub date_label: String,
    pub orders: i32,
    pub sales: f64,
    pub commission: f64,
    pub refunds: f64,
    pub created_at: DateTime<Utc>,
}
