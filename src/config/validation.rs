//! Configuration validation

use regex::Regex;

use crate::config::Settings;
use crate::utils::errors::AdminError;

const MIN_SESSION_SECRET_LEN: usize = 32;

/// Validate loaded settings before the service starts
pub fn validate_settings(settings: &Settings) -> Result<(), AdminError> {
    if settings.server.port == 0 {
        return Err(AdminError::Config("server.port must be non-zero".to_string()));
    }

    if settings.database.url.is_empty() {
        return Err(AdminError::Config("database.url must not be empty".to_string()));
    }
    if !settings.database.url.starts_with("postgres://")
        && !settings.database.url.starts_with("postgresql://")
    {
        return Err(AdminError::Config(
            "database.url must be a postgres connection string".to_string(),
        ));
    }
    if settings.database.min_connections > settings.database.max_connections {
        return Err(AdminError::Config(
            "database.min_connections must not exceed max_connections".to_string(),
        ));
    }

    if settings.auth.session_secret.len() < MIN_SESSION_SECRET_LEN {
        return Err(AdminError::Config(format!(
            "auth.session_secret must be at least {MIN_SESSION_SECRET_LEN} characters"
        )));
    }

    let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map_err(|e| AdminError::Config(format!("invalid email pattern: {e}")))?;
    if !email_re.is_match(&settings.platform.support_email) {
        return Err(AdminError::Config(
            "platform.support_email is not a valid email address".to_string(),
        ));
    }

    if !(0.0..=100.0).contains(&settings.platform.default_commission) {
        return Err(AdminError::Config(
            "platform.default_commission must be between 0 and 100".to_string(),
        ));
    }
    if settings.platform.min_payout_amount < 0.0 {
        return Err(AdminError::Config(
            "platform.min_payout_amount must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.session_secret = "0123456789abcdef0123456789abcdef".to_string();
        settings
    }

    #[test]
    fn accepts_valid_settings() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn rejects_empty_database_url() {
        let mut settings = valid_settings();
        settings.database.url = String::new();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn rejects_non_postgres_url() {
        let mut settings = valid_settings();
        settings.database.url = "mysql://localhost/fixverse".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn rejects_short_session_secret() {
        let mut settings = valid_settings();
        settings.auth.session_secret = "short".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn rejects_bad_support_email() {
        let mut settings = valid_settings();
        settings.platform.support_email = "not-an-email".to_string();
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn rejects_out_of_range_commission() {
        let mut settings = valid_settings();
        settings.platform.default_commission = 120.0;
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }

    #[test]
    fn rejects_zero_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert_matches!(validate_settings(&settings), Err(AdminError::Config(_)));
    }
}
