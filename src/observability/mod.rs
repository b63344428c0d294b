//! # Observability Infrastructure
//!
//! Structured logging for the typing-svg service.

pub mod logging;

pub use logging::{init_logging, log_config_info};
