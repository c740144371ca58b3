//! Semantic error types for client-side operations.
//!
//! These errors are domain-focused, not HTTP-focused. Transport details
//! stay in [`ApiError`]; front-ends map `GuiError` to whatever they show.

use std::fmt;

use crate::api::ApiError;

/// Semantic errors for list view and form operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Entity not found (404-ish).
    NotFound {
        /// Type of entity (e.g., "hotel").
        entity: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// Request validation failed (400-ish).
    ValidationFailed(String),

    /// Operation conflicts with current view state.
    Conflict(String),

    /// The server could not be reached or answered garbage.
    Unavailable(String),

    /// Unexpected internal error.
    Internal(String),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from client errors
// ============================================================================

impl From<ApiError> for GuiError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 404, message } => Self::NotFound {
                entity: "hotel",
                id: message,
            },
            ApiError::Status { status: 400, message } => Self::ValidationFailed(message),
            ApiError::Status { status: 409, message } => Self::Conflict(message),
            ApiError::Status { message, .. } => Self::Internal(message),
            ApiError::Network(msg) | ApiError::Decode(msg) => Self::Unavailable(msg),
        }
    }
}
