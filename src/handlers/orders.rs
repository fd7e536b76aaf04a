//! Orders page: marketplace order listing and fulfilment control

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::order::{Order, OrderStatus};
use crate::models::status::{Badge, StatusBadge};
use crate::utils::errors::AdminError;
use crate::utils::logging;

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub search: Option<String>,
    pub seller: Option<String>,
    pub tab: Option<OrderStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub payment_badge: Badge,
    pub status_badge: Badge,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let payment_badge = order.payment.badge();
        let status_badge = order.status.badge();
        Self {
            order,
            payment_badge,
            status_badge,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrdersPageView {
    pub total: usize,
    pub sellers: Vec<String>,
    pub rows: Vec<OrderView>,
}

/// Search matches order number, buyer or seller; the seller selector is an
/// exact match against the snapshot's seller names.
fn matches_filters(order: &Order, search: &str, seller: Option<&str>) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || order.order_number.to_lowercase().contains(&needle)
        || order.buyer.to_lowercase().contains(&needle)
        || order.seller.to_lowercase().contains(&needle);

    let matches_seller = seller.map_or(true, |s| order.seller == s);

    matches_search && matches_seller
}

fn in_tab(order: &Order, tab: Option<OrderStatus>) -> bool {
    tab.map_or(true, |status| order.status == status)
}

/// Distinct sellers present in the snapshot, for the selector
fn sellers_of(orders: &[Order]) -> Vec<String> {
    let mut sellers: Vec<String> = orders.iter().map(|o| o.seller.clone()).collect();
    sellers.sort();
    sellers.dedup();
    sellers
}

#[get("")]
async fn list_orders(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<OrdersQuery>,
) -> impl Responder {
    let orders = fetch_or_default("orders", "orders", state.db.orders.list().await);
    let search = query.search.as_deref().unwrap_or("");
    let sellers = sellers_of(&orders);

    let rows: Vec<OrderView> = orders
        .into_iter()
        .filter(|o| matches_filters(o, search, query.seller.as_deref()))
        .filter(|o| in_tab(o, query.tab))
        .map(OrderView::from)
        .collect();

    ApiResult::http_success(OrdersPageView {
        total: rows.len(),
        sellers,
        rows,
    })
}

#[post("/{id}/status")]
async fn update_order_status(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, AdminError> {
    let order = state.db.transition_order(*path, body.status).await?;
    logging::log_admin_action(admin.user_id, "order.status", &order.order_number);
    Ok(ApiResult::http_success(OrderView::from(order)))
}

pub fn routes() -> Scope {
    web::scope("/orders")
        .service(list_orders)
        .service(update_order_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderPaymentStatus;
    use chrono::Utc;

    fn order(number: &str, buyer: &str, seller: &str, status: OrderStatus) -> Order {
        Order {
            id: Uuid::new_v4(),
            order_number: number.to_string(),
            buyer: buyer.to_string(),
            seller: seller.to_string(),
            total: 25000.0,
            payment: OrderPaymentStatus::Paid,
            status,
            placed_on: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_number_buyer_or_seller() {
        let o = order("OD1234", "Rahul Sharma", "FixTools", OrderStatus::New);
        assert!(matches_filters(&o, "od1234", None));
        assert!(matches_filters(&o, "rahul", None));
        assert!(matches_filters(&o, "fixtools", None));
        assert!(!matches_filters(&o, "powerhub", None));
    }

    #[test]
    fn seller_selector_is_exact() {
        let o = order("OD1235", "Amit Verma", "PowerHub", OrderStatus::Shipped);
        assert!(matches_filters(&o, "", Some("PowerHub")));
        assert!(!matches_filters(&o, "", Some("powerhub")));
        assert!(!matches_filters(&o, "", Some("FixTools")));
    }

    #[test]
    fn tabs_partition_by_status() {
        let o = order("OD1236", "Sita Patel", "SafeGear", OrderStatus::Cancelled);
        assert!(in_tab(&o, None));
        assert!(in_tab(&o, Some(OrderStatus::Cancelled)));
        assert!(!in_tab(&o, Some(OrderStatus::Delivered)));
    }

    #[test]
    fn sellers_are_distinct_and_sorted() {
        let orders = vec![
            order("OD1", "A", "PowerHub", OrderStatus::New),
            order("OD2", "B", "FixTools", OrderStatus::New),
            order("OD3", "C", "PowerHub", OrderStatus::New),
        ];
        assert_eq!(sellers_of(&orders), vec!["FixTools", "PowerHub"]);
    }
}
