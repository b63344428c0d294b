//! # HTTP API
//!
//! Axum surface in front of the parameter validator: routing, handlers and the
//! translation of validation failures into 4xx responses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::{build_router, ApiState};
pub use server::start_api_server;
