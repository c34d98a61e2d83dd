//! Axum-specific error types and mappings.
//!
//! Maps core error types to HTTP status codes and a JSON response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use stayfinder_core::ports::{CoreError, RepositoryError};
use stayfinder_core::services::SearchError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or wrong API key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Storage backend unreachable.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Unavailable(msg) => HttpError::ServiceUnavailable(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<SearchError> for HttpError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidPage(page) => {
                HttpError::BadRequest(format!("Page index must be non-negative, got {page}"))
            }
            SearchError::Repository(repo_err) => repo_err.into(),
        }
    }
}
