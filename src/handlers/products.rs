//! Products page: catalog listing and listing review

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::product::{Product, ProductStatus};
use crate::models::status::{Badge, StatusBadge};
use crate::utils::errors::AdminError;
use crate::utils::logging;

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tab: Option<ProductStatus>,
}

#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub status_badge: Badge,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let status_badge = product.status.badge();
        Self {
            product,
            status_badge,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductsPageView {
    pub total: usize,
    pub categories: Vec<String>,
    pub rows: Vec<ProductView>,
}

/// Search matches product name or seller; the category selector matches
/// case-insensitively.
fn matches_filters(product: &Product, search: &str, category: Option<&str>) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.seller.to_lowercase().contains(&needle);

    let matches_category =
        category.map_or(true, |c| product.category.eq_ignore_ascii_case(c));

    matches_search && matches_category
}

fn in_tab(product: &Product, tab: Option<ProductStatus>) -> bool {
    tab.map_or(true, |status| product.status == status)
}

/// Distinct categories present in the snapshot, for the selector
fn categories_of(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[get("")]
async fn list_products(
    state: web::Data<AppState>,
    _admin: AdminUser,
    query: web::Query<ProductsQuery>,
) -> impl Responder {
    let products = fetch_or_default("products", "products", state.db.products.list().await);
    let search = query.search.as_deref().unwrap_or("");
    let categories = categories_of(&products);

    let rows: Vec<ProductView> = products
        .into_iter()
        .filter(|p| matches_filters(p, search, query.category.as_deref()))
        .filter(|p| in_tab(p, query.tab))
        .map(ProductView::from)
        .collect();

    ApiResult::http_success(ProductsPageView {
        total: rows.len(),
        categories,
        rows,
    })
}

async fn review(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
    decision: ProductStatus,
) -> Result<HttpResponse, AdminError> {
    let product = state.db.review_product(id, decision).await?;
    logging::log_admin_action(
        admin.user_id,
        match decision {
            ProductStatus::Approved => "product.approve",
            _ => "product.reject",
        },
        &product.product_code,
    );
    Ok(ApiResult::http_success(ProductView::from(product)))
}

#[post("/{id}/approve")]
async fn approve_product(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    review(&state, &admin, *path, ProductStatus::Approved).await
}

#[post("/{id}/reject")]
async fn reject_product(
    state: web::Data<AppState>,
    admin: AdminUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AdminError> {
    review(&state, &admin, *path, ProductStatus::Rejected).await
}

pub fn routes() -> Scope {
    web::scope("/products")
        .service(list_products)
        .service(approve_product)
        .service(reject_product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, seller: &str, category: &str, status: ProductStatus) -> Product {
        Product {
            id: Uuid::new_v4(),
            product_code: "PRD-0001".to_string(),
            name: name.to_string(),
            seller: seller.to_string(),
            category: category.to_string(),
            icon: "🔧".to_string(),
            price: 24500.0,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn search_matches_name_or_seller() {
        let p = product("Hydraulic Jack 500T", "FixTools", "Tools", ProductStatus::Pending);
        assert!(matches_filters(&p, "hydraulic", None));
        assert!(matches_filters(&p, "fixtools", None));
        assert!(!matches_filters(&p, "drill", None));
    }

    #[test]
    fn category_selector_is_case_insensitive() {
        let p = product("Drill Machine Pro", "PowerHub", "Machinery", ProductStatus::Approved);
        assert!(matches_filters(&p, "", Some("machinery")));
        assert!(matches_filters(&p, "", Some("Machinery")));
        assert!(!matches_filters(&p, "", Some("Tools")));
    }

    #[test]
    fn tabs_partition_by_review_status() {
        let p = product("Safety Helmet", "SafeGear", "Safety", ProductStatus::Rejected);
        assert!(in_tab(&p, None));
        assert!(in_tab(&p, Some(ProductStatus::Rejected)));
        assert!(!in_tab(&p, Some(ProductStatus::Pending)));
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let products = vec![
            product("A", "S", "Tools", ProductStatus::Pending),
            product("B", "S", "Machinery", ProductStatus::Pending),
            product("C", "S", "Tools", ProductStatus::Approved),
        ];
        assert_eq!(categories_of(&products), vec!["Machinery", "Tools"]);
    }
}
