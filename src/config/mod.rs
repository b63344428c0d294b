//! # Configuration Management
//!
//! Service configuration loaded from `TYPING_SVG_*` environment variables.
//! The binary loads a `.env` file first and lets CLI flags override the result.

pub mod settings;

pub use settings::{ObservabilityConfig, ServerConfig, LOG_LEVELS};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// HTTP server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// Logging configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let port = match std::env::var("TYPING_SVG_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| Error::config(format!("Invalid server port '{}': {}", port, e)))?,
            Err(_) => defaults.server.port,
        };

        let host = std::env::var("TYPING_SVG_HOST").unwrap_or(defaults.server.host);

        let enable_cors = env_flag("TYPING_SVG_ENABLE_CORS").unwrap_or(defaults.server.enable_cors);

        let log_level =
            std::env::var("TYPING_SVG_LOG_LEVEL").unwrap_or(defaults.observability.log_level);

        let json_logging =
            env_flag("TYPING_SVG_JSON_LOGGING").unwrap_or(defaults.observability.json_logging);

        let service_name =
            std::env::var("TYPING_SVG_SERVICE_NAME").unwrap_or(defaults.observability.service_name);

        Ok(Self {
            server: ServerConfig { host, port, enable_cors },
            observability: ObservabilityConfig { service_name, log_level, json_logging },
        })
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(Error::from)
    }
}

fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|s| s.to_lowercase() == "true" || s == "1")
}
