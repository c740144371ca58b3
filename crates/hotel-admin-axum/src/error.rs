//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `CoreError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hotel_admin_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Generic message for faults without a more specific context.
pub const GENERIC_FAULT: &str = "Something went wrong!";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error. The message is shown to clients verbatim,
    /// so it must not carry internal detail.
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
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl HttpError {
    /// Map a core error, replacing server faults with `fault`.
    ///
    /// Client errors keep their message. Faults are logged with their
    /// full detail and answered with the generic `fault` text only.
    pub fn from_core(err: CoreError, fault: &str) -> Self {
        match err {
            CoreError::Invalid(errors) => Self::BadRequest(errors.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(RepositoryError::AlreadyExists(msg)) => Self::Conflict(msg),
            other => {
                tracing::error!(target: "hotel_admin.http", error = %other, "{fault}");
                Self::Internal(fault.to_string())
            }
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        Self::from_core(err, GENERIC_FAULT)
    }
}
