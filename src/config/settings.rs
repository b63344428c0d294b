//! # Configuration Settings
//!
//! Defines the configuration sections for the typing-svg service.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Log levels accepted by the logging setup
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server bind address
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Server port
    #[validate(range(min = 1, max = 65535, message = "Port must be between 1 and 65535"))]
    pub port: u16,

    /// Enable permissive CORS so the endpoint can be embedded anywhere
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080, enable_cors: true }
    }
}

impl ServerConfig {
    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Service name attached to startup logs
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "typing-svg".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        return Err(ValidationError::new("invalid_log_level")
            .with_message("Log level must be one of trace, debug, info, warn, error".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_bind_address() {
        let config = ServerConfig { host: "127.0.0.1".to_string(), port: 3000, ..Default::default() };
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_validation() {
        assert!(ServerConfig::default().validate().is_ok());

        let config = ServerConfig { port: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = ServerConfig { host: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_observability_config_validation() {
        assert!(ObservabilityConfig::default().validate().is_ok());

        let config = ObservabilityConfig { log_level: "DEBUG".to_string(), ..Default::default() };
        assert!(config.validate().is_ok());

        let config = ObservabilityConfig { log_level: "verbose".to_string(), ..Default::default() };
        assert!(config.validate().is_err());

        let config = ObservabilityConfig { log_level: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
