//! The hotel API port consumed by the store and the forms.

use async_trait::async_trait;
use hotel_admin_core::{Hotel, HotelListQuery, HotelPage, HotelUpdate, NewHotel};
use thiserror::Error;

/// Errors surfaced by a [`HotelApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `{error}` text when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Client-side access to `/api/hotels`.
#[async_trait]
pub trait HotelApi: Send + Sync {
    /// `GET /api/hotels` with the filter and page of `query`.
    async fn list_hotels(&self, query: &HotelListQuery) -> Result<HotelPage, ApiError>;

    /// `POST /api/hotels`.
    async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, ApiError>;

    /// `PUT /api/hotels` with `id` merged into the changed fields.
    async fn update_hotel(&self, id: &str, changes: &HotelUpdate) -> Result<Hotel, ApiError>;
}
