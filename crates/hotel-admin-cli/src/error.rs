//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from client and core errors to exit codes and user-facing messages.

use hotel_admin_core::{PathError, ValidationErrors};
use hotel_admin_gui::GuiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error not caught by the parser.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Input rejected by the hotel form rules.
    #[error("Invalid hotel: {0}")]
    Validation(String),

    /// The server rejected or failed the request.
    #[error("{0}")]
    Api(String),

    /// The server could not be reached.
    #[error("Server unavailable: {0}")]
    Unavailable(String),

    /// Configuration or path resolution error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local server failed to start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or input
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) | Self::Validation(_) => 2,
            Self::Api(_) | Self::Unavailable(_) | Self::Config(_) | Self::Server(_) => 1,
        }
    }
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::ValidationFailed(msg) => Self::Validation(msg),
            GuiError::Unavailable(msg) => Self::Unavailable(msg),
            GuiError::NotFound { entity, id } => Self::Api(format!("{entity} not found: {id}")),
            GuiError::Conflict(msg) | GuiError::Internal(msg) => Self::Api(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}
