//! List query and page types.

use serde::{Deserialize, Serialize};

use super::Hotel;

/// Fixed number of hotels per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Conjunctive filter over hotels. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilter {
    /// Case-insensitive substring of the hotel name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Minimum rating (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Minimum nightly price (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    /// Maximum nightly price (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
}

impl HotelFilter {
    /// The name fragment as typed, if one is set and not empty.
    ///
    /// Whitespace is significant: `"Inn "` does not match `"Inner Court"`.
    pub fn name_fragment(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The fragment folded with Unicode lowercasing, as stored in `name_lower`.
    pub fn name_folded(&self) -> Option<String> {
        self.name_fragment().map(str::to_lowercase)
    }

    /// Returns true when the filter matches every record.
    pub fn is_unconstrained(&self) -> bool {
        self.name_fragment().is_none()
            && self.rating.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }

    /// Evaluate the predicate against a single hotel.
    ///
    /// Mirrors the SQL predicate; used by in-memory fakes and tests.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(fragment) = self.name_folded() {
            if !hotel.name.to_lowercase().contains(&fragment) {
                return false;
            }
        }
        if let Some(min) = self.rating {
            if hotel.rating < min {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if hotel.price_per_night < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if hotel.price_per_night > max {
                return false;
            }
        }
        true
    }
}

/// A filter plus a 1-based page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelListQuery {
    pub filter: HotelFilter,
    pub page: u32,
}

impl Default for HotelListQuery {
    fn default() -> Self {
        Self {
            filter: HotelFilter::default(),
            page: 1,
        }
    }
}

impl HotelListQuery {
    /// Build a query; page 0 is treated as page 1.
    #[must_use]
    pub fn new(filter: HotelFilter, page: u32) -> Self {
        Self {
            filter,
            page: page.max(1),
        }
    }

    /// Number of rows to skip: `(page - 1) * PAGE_SIZE`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(PAGE_SIZE)
    }

    pub const fn limit(&self) -> u32 {
        PAGE_SIZE
    }
}

/// One page of hotels plus the total number of matches, ignoring pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPage {
    pub hotels: Vec<Hotel>,
    pub total_count: u64,
}

impl HotelPage {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count)
    }
}

/// `ceil(total_count / PAGE_SIZE)`.
pub fn total_pages(total_count: u64) -> u32 {
    let pages = total_count.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
