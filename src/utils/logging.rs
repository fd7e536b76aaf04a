//! Logging configuration and setup
//!
//! This module provides tracing initialization and structured logging
//! helpers used across the admin backend.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{AdminError, Result};

/// Initialize logging based on configuration
///
/// Returns the appender guard; it must be kept alive for the lifetime of
/// the process so buffered log lines are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "fixverse-admin.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .try_init()
        .map_err(|e| AdminError::Config(format!("failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions against platform records
pub fn log_admin_action(admin_id: uuid::Uuid, action: &str, target: &str) {
    warn!(
        admin_id = %admin_id,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log a failed page fetch that degraded to an empty row set
pub fn log_page_fetch_error(page: &str, entity: &str, error: &dyn std::fmt::Display) {
    warn!(
        page = page,
        entity = entity,
        error = %error,
        "Page fetch failed, rendering empty set"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_accepts_temp_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = LoggingConfig {
            level: "info".to_string(),
            file_path: dir.path().to_string_lossy().to_string(),
        };
        // A second init in the same process is rejected by tracing; both
        // outcomes prove the appender wiring itself is sound.
        match init_logging(&config) {
            Ok(_guard) => {}
            Err(AdminError::Config(msg)) => assert!(msg.contains("logging")),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
