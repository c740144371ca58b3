//! Traits the core expects its adapters to implement.
//!
//! Signatures use domain types only; storage crates stay out of them.

pub mod hotel_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::validation::ValidationErrors;

pub use hotel_repository::HotelRepository;

#[cfg(test)]
pub use hotel_repository::MockHotelRepository;

/// Repository handles handed to [`AppCore`](crate::AppCore).
///
/// Built by `hotel_admin_db::factory::build_repos` and passed in by each
/// adapter's bootstrap, so the core never names a concrete store.
#[derive(Clone)]
pub struct Repos {
    pub hotels: Arc<dyn HotelRepository>,
}

impl Repos {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }
}

/// Storage failures, stripped of backend types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Insert with an id that is already taken.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored column could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors returned by core services.
///
/// The HTTP layer turns these into status codes; anything that is not
/// the caller's fault becomes a generic 500.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// One or more fields failed the schema.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The request was malformed before any field was checked.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Validation(_))
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
