//! Typed error handling for the API
//!
//! Every validation chain stage short-circuits by returning an [`ApiError`],
//! which skips the remaining stages and the handler. The `IntoResponse` impl
//! is the process-wide translator that maps a failure to an HTTP response
//! with an `{"error": message}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The error type shared by both resource chains
///
/// Two kinds surface from validated code paths: a missing entity
/// ([`NotFound`](ApiError::NotFound)) and a malformed payload, illegal id
/// change, or illegal status transition ([`BadRequest`](ApiError::BadRequest)).
/// [`Internal`](ApiError::Internal) only occurs when a store lock is poisoned.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity was not found by id
    #[error("{0}")]
    NotFound(String),

    /// Malformed payload, illegal id change, or illegal status transition
    #[error("{0}")]
    BadRequest(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response body
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_body());
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
