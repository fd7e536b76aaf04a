//! Payments page: revenue stats, commission settings, transactions and
//! seller payout requests

use actix_web::{HttpResponse, Responder, Scope, get, post, put, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::payment::{
    CommissionSetting, PayoutRequest, Transaction, TxnType, UpdateCommissionRequest,
};
use crate::models::status::{Badge, StatusBadge};
use crate::utils::errors::AdminError;
use crate::utils::logging;

#[derive(Debug, Deserialize)]
pub struct PaymentsQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub txn_type: Option<TxnType>,
}

#[derive(Debug, Serialize)]
pub struct TransactionView {
    #[serde(flatten)]
    pub txn: Transaction,
    pub type_badge: Badge,
    pub status_badge: Badge,
}

impl From<Transaction> for TransactionView {
    fn from(txn: Transaction) -> Self {
        let type_badge = txn.txn_type.badge();
        let status_badge = txn.status.badge();
        Self {
            txn,
            type_badge,
            status_badge,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct PaymentStats {
    pub gmv: f64,
    pub commission: f64,
    pub payouts: f64,
    pub refunds: f64,
}

#[derive(Debug, Serialize)]
pub struct PaymentsPageView {
    pub stats: PaymentStats,
    pub commission_settings: Vec<CommissionSetting>,
    pub transactions: Vec<TransactionView>,
    pub payout_requests: Vec<PayoutRequest>,
}

/// Search matches order id or seller; the type selector is an equality
/// filter over the transaction type.
fn matches_filters(txn: &Transaction, search: &str, txn_type: Option<TxnType>) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || txn.order_id.to_lowercase().contains(&needle)
        || txn.seller.to_lowercase().contains(&needle);

    let matches_type = txn_type.map_or(true, |wanted| txn.txn_type == wanted);

    matches_search && matches_type
}

#[get("")]
async fn payments_page(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<PaymentsQuery>,
) -> impl Responder {
    let payments = &state.db.payments;

    let (gmv, payouts, refunds, commission_settings, transactions, payout_requests) = tokio::join!(
        payments.sum_amount_by_type(TxnType::Order),
        payments.sum_amount_by_type(TxnType::Payout),
        payments.sum_amount_by_type(TxnType::Refund),
        payments.commission_settings(),
        payments.transactions(),
        payments.payout_requests(),
    );

    let gmv = fetch_or_default("payments", "gmv", gmv);
    let stats = PaymentStats {
        gmv,
        commission: gmv * state.settings.platform.default_commission / 100.0,
        payouts: fetch_or_default("payments", "payouts", payouts),
        refunds: fetch_or_default("payments", "refunds", refunds).abs(),
    };

    let search = query.search.as_deref().unwrap_or("");
    let transactions: Vec<TransactionView> =
        fetch_or_default("payments", "transactions", transactions)
            .into_iter()
            .filter(|t| matches_filters(t, search, query.txn_type))
            .map(TransactionView::from)
            .collect();

    ApiResult::http_success(PaymentsPageView {
        stats,
        commission_settings: fetch_or_default(
            "payments",
            "commission_settings",
            commission_settings,
        ),
        transactions,
        payout_requests: fetch_or_default("payments", "payout_requests", payout_requests),
    })
}

#[put("/commission/{id}")]
async fn update_commission(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCommissionRequest>,
) -> Result<HttpResponse, AdminError> {
    if !(0.0..=100.0).contains(&body.commission) {
        return Err(AdminError::InvalidInput(
            "commission must be between 0 and 100".to_string(),
        ));
    }

    let setting = state
        .db
        .payments
        .update_commission(*path, body.commission)
        .await?;
    logging::log_admin_action(admin.user_id, "commission.update", &setting.category);
    Ok(ApiResult::http_success(setting))
}

#[post("/payouts/{id}/approve")]
async fn approve_payout(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    let txn = state.db.approve_payout(*path).await?;
    logging::log_admin_action(admin.user_id, "payout.approve", &txn.txn_id);
    Ok(ApiResult::http_success(TransactionView::from(txn)))
}

#[post("/payouts/{id}/hold")]
async fn hold_payout(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    let request = state.db.hold_payout(*path).await?;
    logging::log_admin_action(admin.user_id, "payout.hold", &request.request_id);
    Ok(ApiResult::http_success(request))
}

pub fn routes() -> Scope {
    web::scope("/payments")
        .service(payments_page)
        .service(update_commission)
        .service(approve_payout)
        .service(hold_payout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payment::TxnStatus;
    use chrono::Utc;

    fn txn(order_id: &str, seller: &str, txn_type: TxnType) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            txn_id: "T9876".to_string(),
            txn_type,
            order_id: order_id.to_string(),
            seller: seller.to_string(),
            amount: 5000.0,
            status: TxnStatus::Settled,
            txn_date: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_order_or_seller() {
        let t = txn("OD1234", "FixTools", TxnType::Order);
        assert!(matches_filters(&t, "od1234", None));
        assert!(matches_filters(&t, "fixtools", None));
        assert!(!matches_filters(&t, "safegear", None));
    }

    #[test]
    fn type_selector_filters_transactions() {
        let t = txn("-", "PowerHub", TxnType::Payout);
        assert!(matches_filters(&t, "", Some(TxnType::Payout)));
        assert!(!matches_filters(&t, "", Some(TxnType::Refund)));
        assert!(matches_filters(&t, "", None));
    }

    #[test]
    fn search_and_type_combine() {
        let t = txn("OD1236", "SafeGear", TxnType::Refund);
        assert!(matches_filters(&t, "safegear", Some(TxnType::Refund)));
        assert!(!matches_filters(&t, "safegear", Some(TxnType::Order)));
    }
}
