//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use ranportal_types::{SimulationResult, ValidationError};
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Result computed before the failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_result: Option<SimulationResult>,
}

/// Errors surfaced by route handlers
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a JSON object
    MalformedBody(String),
    /// The request failed validation
    Validation(ValidationError),
    /// The requested record does not exist
    NotFound(String),
    /// The store failed; the computed result, if any, is still reported
    Storage {
        /// Store error message
        message: String,
        /// The estimate that could not be persisted
        simulation_result: Option<SimulationResult>,
    },
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, simulation_result) = match self {
            Self::MalformedBody(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::Storage {
                message,
                simulation_result,
            } => (StatusCode::INTERNAL_SERVER_ERROR, message, simulation_result),
        };

        (
            status,
            Json(ErrorBody {
                error,
                simulation_result,
            }),
        )
            .into_response()
    }
}
