//! Render parameter endpoints
//!
//! `GET /` validates the query string. `POST /` validates the query string
//! overlaid with an urlencoded form body, the body winning on shared keys.
//! Both respond with the validated parameter record as JSON. Malformed query
//! strings or form bodies are answered with a JSON `bad_request` error.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    Form, Json,
};
use tracing::{debug, error, warn};

use crate::api::{error::ApiError, routes::ApiState};
use crate::errors::Error;
use crate::validation::{ParameterDefaults, RawInput, RenderParameters};

pub async fn render_parameters_handler(
    State(state): State<ApiState>,
    query: Result<Query<RawInput>, QueryRejection>,
) -> Result<Json<RenderParameters>, ApiError> {
    let Query(raw) = query.map_err(reject_query)?;
    validate(&raw, &state.defaults)
}

/// The form body is optional: a POST without an urlencoded body is validated
/// from its query string alone.
pub async fn render_parameters_form_handler(
    State(state): State<ApiState>,
    query: Result<Query<RawInput>, QueryRejection>,
    form: Result<Form<RawInput>, FormRejection>,
) -> Result<Json<RenderParameters>, ApiError> {
    let Query(mut raw) = query.map_err(reject_query)?;
    match form {
        Ok(Form(form)) => raw.merge(form),
        Err(FormRejection::InvalidFormContentType(_)) => {
            debug!("No urlencoded body, using query parameters only");
        }
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected form body");
            return Err(ApiError::BadRequest(rejection.body_text()));
        }
    }
    validate(&raw, &state.defaults)
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    warn!(error = %rejection.body_text(), "Rejected query string");
    ApiError::BadRequest(rejection.body_text())
}

fn validate(
    raw: &RawInput,
    defaults: &ParameterDefaults,
) -> Result<Json<RenderParameters>, ApiError> {
    match RenderParameters::from_raw_with_defaults(raw, defaults) {
        Ok(params) => {
            debug!(
                line_count = params.lines.len(),
                font = %params.font,
                color = %params.color,
                size = params.size,
                center = params.center,
                width = params.width,
                height = params.height,
                "Validated render parameters"
            );
            Ok(Json(params))
        }
        Err(Error::Validation(err)) => {
            warn!(kind = err.kind(), error = err.message(), "Rejected render parameters");
            Err(err.into())
        }
        Err(err) => {
            error!(error = %err, "Configured parameter defaults are unusable");
            Err(err.into())
        }
    }
}
