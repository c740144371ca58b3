//! Hotel domain types.
//!
//! Wire names are camelCase (`pricePerNight`) so the same types serialize
//! directly into the HTTP contract.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Persisted records
// ─────────────────────────────────────────────────────────────────────────────

/// A hotel that exists in the system with a server-assigned ID.
///
/// Use `NewHotel` for hotels that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Opaque identifier, assigned once at creation and never changed.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// City or region.
    pub location: String,
    /// Street address.
    pub address: String,
    /// Star rating in `[0, 5]`.
    #[serde(default)]
    pub rating: f64,
    /// Ordered photo URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Nightly price, never negative.
    pub price_per_night: f64,
    /// Rooms belonging to this hotel (read-only here).
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A room belonging to a hotel.
///
/// Rooms are only surfaced as part of a hotel's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Write models
// ─────────────────────────────────────────────────────────────────────────────

/// A hotel to be inserted (no ID yet).
///
/// `rating` defaults to 0 and `photos` to an empty list when absent from
/// the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
    pub address: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub photos: Vec<String>,
    pub price_per_night: f64,
}

impl NewHotel {
    /// Create a new hotel with the required fields.
    ///
    /// Rating starts at 0, photos and description are empty.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        address: impl Into<String>,
        price_per_night: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            location: location.into(),
            address: address.into(),
            rating: 0.0,
            photos: Vec::new(),
            price_per_night,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.photos = photos;
        self
    }
}

/// A partial update of a hotel's mutable fields.
///
/// `None` means "leave unchanged". The only field that can be cleared is
/// `description`, by sending an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
}

impl HotelUpdate {
    /// Returns true when no field would change.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.address.is_none()
            && self.rating.is_none()
            && self.photos.is_none()
            && self.price_per_night.is_none()
    }

    /// Apply the present fields to `hotel` in place.
    pub fn apply_to(&self, hotel: &mut Hotel) {
        if let Some(name) = &self.name {
            hotel.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            // Empty clears the description.
            hotel.description = (!description.is_empty()).then(|| description.clone());
        }
        if let Some(location) = &self.location {
            hotel.location.clone_from(location);
        }
        if let Some(address) = &self.address {
            hotel.address.clone_from(address);
        }
        if let Some(rating) = self.rating {
            hotel.rating = rating;
        }
        if let Some(photos) = &self.photos {
            hotel.photos.clone_from(photos);
        }
        if let Some(price) = self.price_per_night {
            hotel.price_per_night = price;
        }
    }
}
