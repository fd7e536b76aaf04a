//! Settings page: platform profile, fee configuration and per-category
//! commission rates

use actix_web::{Responder, Scope, get, web};
use serde::Serialize;

use crate::config::PlatformConfig;
use crate::handlers::{ApiResult, AppState, fetch_or_default};
use crate::middleware::AdminUser;
use crate::models::payment::CommissionSetting;

#[derive(Debug, Serialize)]
pub struct SettingsPageView {
    pub platform: PlatformConfig,
    pub commissions: Vec<CommissionSetting>,
}

#[get("")]
async fn settings_page(state: web::Data<AppState>, _admin: AdminUser) -> impl Responder {
    let commissions = fetch_or_default(
        "settings",
        "commission_settings",
        state.db.payments.commission_settings().await,
    );

    ApiResult::http_success(SettingsPageView {
        platform: state.settings.platform.clone(),
        commissions,
    })
}

pub fn routes() -> Scope {
    web::scope("/settings").service(settings_page)
}
