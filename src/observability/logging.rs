//! # Structured Logging
//!
//! Subscriber setup and span helpers built on the tracing ecosystem.
//!
//! `RUST_LOG` takes precedence over the configured log level so individual
//! targets can be tuned without a restart of the configuration pipeline.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, ObservabilityConfig};
use crate::errors::{Error, Result};

/// Create a tracing span for request tracking
///
/// ```rust,ignore
/// let span = request_span!("GET", "/");
/// let span = request_span!("POST", "/", content_type = "application/x-www-form-urlencoded");
/// ```
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            request_id = %uuid::Uuid::new_v4()
        )
    };
    ($method:expr, $path:expr, $($field:tt)*) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            request_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when another subscriber was already installed (tests,
/// embedding applications); that is not treated as an error.
pub fn init_logging(config: &ObservabilityConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_level.to_lowercase()).map_err(|e| {
            Error::config(format!("Invalid log level '{}': {}", config.log_level, e))
        })?,
    };

    let installed = if config.json_logging {
        tracing::subscriber::set_global_default(
            fmt().json().with_env_filter(filter).with_current_span(true).finish(),
        )
        .is_ok()
    } else {
        tracing::subscriber::set_global_default(fmt().with_env_filter(filter).finish()).is_ok()
    };

    Ok(installed)
}

/// Log configuration at startup
pub fn log_config_info(config: &Config) {
    tracing::info!(
        service_name = %config.observability.service_name,
        server_address = %config.server.bind_address(),
        cors_enabled = %config.server.enable_cors,
        log_level = %config.observability.log_level,
        json_logging = %config.observability.json_logging,
        "typing-svg configuration"
    );
}
