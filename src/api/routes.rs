use std::sync::Arc;

use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::Validate;

use crate::errors::{Error, Result};
use crate::validation::ParameterDefaults;

use super::handlers::{health_handler, render_parameters_form_handler, render_parameters_handler};

#[derive(Debug, Clone)]
pub struct ApiState {
    pub defaults: Arc<ParameterDefaults>,
}

impl ApiState {
    /// Build state around `defaults`, refusing values that would fail their own field checks
    pub fn new(defaults: ParameterDefaults) -> Result<Self> {
        defaults.validate().map_err(Error::from)?;
        Ok(Self { defaults: Arc::new(defaults) })
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self { defaults: Arc::new(ParameterDefaults::default()) }
    }
}

pub fn build_router(state: ApiState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/", get(render_parameters_handler).post(render_parameters_form_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            crate::request_span!(request.method(), request.uri().path())
        }));

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
