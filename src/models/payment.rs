//! Payments, transactions, payouts and commission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "txn_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Order,
    Payout,
    Refund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "txn_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    Settled,
    Processed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub txn_id: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub order_id: String,
    pub seller: String,
    pub amount: f64,
    pub status: TxnStatus,
    pub txn_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub txn_id: String,
    pub txn_type: TxnType,
    pub order_id: String,
    pub seller: String,
    pub amount: f64,
    pub status: TxnStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PayoutRequest {
    pub id: Uuid,
    pub request_id: String,
    pub seller: String,
    pub requested_amount: f64,
    pub available_balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommissionSetting {
    pub id: Uuid,
    pub category: String,
    pub commission: f64,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommissionRequest {
    pub commission: f64,
}
