use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::validation::ParameterError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    MissingParameter(String),
    InvalidParameter(String),
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::MissingParameter(_)
            | ApiError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let error_kind = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::MissingParameter(_) => "missing_parameter",
            ApiError::InvalidParameter(_) => "invalid_parameter",
            ApiError::Internal(_) => "internal_error",
        };

        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::MissingParameter(msg)
            | ApiError::InvalidParameter(msg)
            | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorBody { error: error_kind.to_string(), message })).into_response()
    }
}

impl From<ParameterError> for ApiError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::MissingParameter(msg) => ApiError::MissingParameter(msg),
            ParameterError::InvalidParameter(msg) => ApiError::InvalidParameter(msg),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(err) => err.into(),
            Error::Config(msg) | Error::Transport(msg) => ApiError::Internal(msg),
        }
    }
}
