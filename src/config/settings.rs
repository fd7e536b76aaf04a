//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
    pub platform: PlatformConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Session validation configuration
///
/// Sessions are issued by the external auth provider; this service only
/// verifies the signed tokens it receives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub session_secret: String,
}

/// Platform-level settings surfaced on the Settings page
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformConfig {
    pub name: String,
    pub support_email: String,
    pub support_phone: String,
    pub address: String,
    pub gst_number: String,
    pub pan_number: String,
    pub default_commission: f64,
    pub payout_cycle_days: u32,
    pub min_payout_amount: f64,
    pub gst_rate: f64,
    pub session_timeout_minutes: u32,
    pub min_password_length: u32,
    pub maintenance_mode: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FIXVERSE"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseSettings {
                url: "postgresql://localhost/fixverse".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            auth: AuthConfig {
                session_secret: String::new(),
            },
            platform: PlatformConfig {
                name: "Fixverse".to_string(),
                support_email: "support@fixverse.com".to_string(),
                support_phone: "+91 98765 43210".to_string(),
                address: "Fixverse HQ, Nagpur, Maharashtra, India".to_string(),
                gst_number: "27AABCU9603R1ZM".to_string(),
                pan_number: "AABCU9603R".to_string(),
                default_commission: 10.0,
                payout_cycle_days: 7,
                min_payout_amount: 1000.0,
                gst_rate: 18.0,
                session_timeout_minutes: 30,
                min_password_length: 8,
                maintenance_mode: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/fixverse".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert!(settings.database.url.starts_with("postgresql://"));
        assert_eq!(settings.platform.default_commission, 10.0);
        assert!(!settings.platform.maintenance_mode);
    }
}
