//! HTTP request handlers

pub mod health;
pub mod parameters;

pub use health::{health_handler, HealthResponse};
pub use parameters::{render_parameters_form_handler, render_parameters_handler};
