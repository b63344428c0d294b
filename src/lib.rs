//! # typing-svg
//!
//! Request parameter validation for a "typing" animation SVG endpoint.
//!
//! Raw request parameters (`lines`, `font`, `color`, `size`, `center`, `width`,
//! `height`) are sanitized and checked into a [`RenderParameters`] record that a
//! template renderer consumes. Font, color and center are normalized silently;
//! a missing `lines` parameter or a non-positive number is rejected.
//!
//! ## Architecture
//!
//! ```text
//! HTTP (axum) → RawInput → ParameterValidator → RenderParameters → renderer
//!      ↓
//! Structured logging (tracing)
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use typing_svg::{RawInput, RenderParameters};
//!
//! let raw = RawInput::new().with("lines", "Hello;World").with("color", "ff00ff");
//! let params = RenderParameters::from_raw(&raw).unwrap();
//! assert_eq!(params.lines, vec!["Hello", "World"]);
//! assert_eq!(params.color, "#ff00ff");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod validation;

// Re-export commonly used types and traits
pub use config::Config;
pub use errors::{Error, Result};
pub use validation::{ParameterDefaults, ParameterError, RawInput, RenderParameters};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
