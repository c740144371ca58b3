//! Hotel repository trait definition.
//!
//! This port defines the interface for hotel persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Hotel, HotelFilter, HotelListQuery, HotelUpdate, NewHotel};

/// Repository for hotel persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `find_page` and `count` must apply the identical predicate
/// - Rooms are read-only: returned with hotels, never written here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// One page of hotels matching the query's filter, rooms attached,
    /// in a stable insertion order.
    ///
    /// A page past the last one yields an empty list.
    async fn find_page(&self, query: &HotelListQuery) -> Result<Vec<Hotel>, RepositoryError>;

    /// Number of hotels matching `filter`, ignoring pagination.
    async fn count(&self, filter: &HotelFilter) -> Result<u64, RepositoryError>;

    /// Get a hotel by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the hotel doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<Hotel, RepositoryError>;

    /// Insert a new hotel, assigning its ID.
    ///
    /// Returns the persisted hotel.
    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError>;

    /// Write the fields present in `changes`; absent fields are left unchanged.
    ///
    /// Returns the hotel as stored after the update, or
    /// `Err(RepositoryError::NotFound)` if the hotel doesn't exist.
    async fn update(&self, id: &str, changes: &HotelUpdate) -> Result<Hotel, RepositoryError>;
}
