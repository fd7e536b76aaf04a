//! Reports page: aggregated sales figures plus a CSV export of the
//! detailed breakdown

use actix_web::{HttpResponse, Responder, Scope, get, web};
use serde::Serialize;

use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::report::{ReportCategory, ReportDetailed, SalesDaily};

#[derive(Debug, Default, Serialize)]
pub struct ReportStats {
    pub total_sales: f64,
    pub total_orders: i64,
    pub total_commission: f64,
    pub total_refunds: f64,
}

#[derive(Debug, Serialize)]
pub struct ReportsPageView {
    pub stats: ReportStats,
    pub sales_daily: Vec<SalesDaily>,
    pub categories: Vec<ReportCategory>,
    pub detailed: Vec<ReportDetailed>,
}

/// Headline stats are sums over the detailed breakdown rows.
fn report_stats(detailed: &[ReportDetailed]) -> ReportStats {
    let mut stats = ReportStats::default();
    for row in detailed {
        stats.total_sales += row.sales;
        stats.total_orders += i64::from(row.orders);
        stats.total_commission += row.commission;
        stats.total_refunds += row.refunds;
    }
    stats
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_csv(rows: &[ReportDetailed]) -> String {
    let mut out = String::from("Date,Orders,Sales,Commission,Refunds\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{:.2},{:.2},{:.2}\n",
            csv_field(&row.date_label),
            row.orders,
            row.sales,
            row.commission,
            row.refunds,
        ));
    }
    out
}

#[get("")]
async fn reports_page(state: web::Data<AppState>, _admin: AdminUser) -> impl Responder {
    let reports = &state.db.reports;
    let (sales_daily, categories, detailed) =
        tokio::join!(reports.sales_daily(), reports.categories(), reports.detailed());

    let detailed = fetch_or_default("reports", "report_detailed", detailed);

    ApiResult::http_success(ReportsPageView {
        stats: report_stats(&detailed),
        sales_daily: fetch_or_default("reports", "report_sales_daily", sales_daily),
        categories: fetch_or_default("reports", "report_category", categories),
        detailed,
    })
}

#[get("/export")]
async fn export_report(state: web::Data<AppState>, _admin: AdminUser) -> impl Responder {
    let detailed = fetch_or_default(
        "reports",
        "report_detailed",
        state.db.reports.detailed().await,
    );

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"sales-report.csv\"",
        ))
        .body(render_csv(&detailed))
}

pub fn routes() -> Scope {
    web::scope("/reports")
        .service(reports_page)
        .service(export_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn detailed(date_label: &str, orders: i32, sales: f64) -> ReportDetailed {
        ReportDetailed {
            id: Uuid::new_v4(),
            date_label: date_label.to_string(),
            orders,
            sales,
            commission: sales * 0.1,
            refunds: 0.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stats_sum_detailed_rows() {
        let rows = vec![detailed("01 Jan", 4, 1000.0), detailed("02 Jan", 6, 2500.0)];
        let stats = report_stats(&rows);
        assert_eq!(stats.total_orders, 10);
        assert!((stats.total_sales - 3500.0).abs() < f64::EPSILON);
        assert!((stats.total_commission - 350.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_report_yields_zero_stats() {
        let stats = report_stats(&[]);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_sales, 0.0);
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("01 Jan"), "01 Jan");
        assert_eq!(csv_field("Jan, week 1"), "\"Jan, week 1\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let rows = vec![detailed("01 Jan", 4, 1000.0)];
        let csv = render_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Orders,Sales,Commission,Refunds"));
        assert_eq!(lines.next(), Some("01 Jan,4,1000.00,100.00,0.00"));
        assert_eq!(lines.next(), None);
    }
}
