//! Headless client side of the hotel-admin panel.
//!
//! This crate holds everything a front-end needs besides drawing: the
//! `HotelApi` port and its HTTP implementation, the `HotelStore` list state,
//! the `HotelTable` list view and the `HotelForm` create/edit forms.
//!
//! # Architecture
//!
//! ```text
//! Front-ends:   hotel-admin-cli     (any other renderer)
//!                      ↓                    ↓
//! Views:        HotelTable ── HotelForm ────┘
//!                      ↓
//! State:          HotelStore
//!                      ↓
//! Port:         HotelApi ── HttpHotelApi ──→ /api/hotels
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - Must not depend on axum, tower or sqlx
//! 2. **Single writer** - Only `HotelStore::fetch_hotels` writes list state
//! 3. **Trait-based injection** - Views reach the server through `HotelApi`
//! 4. **Semantic errors** - Returns `GuiError`; transport detail stays in `ApiError`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod api;
mod config;
mod debounce;
mod error;
mod form;
mod http;
mod store;
mod table;

// Primary exports
pub use api::{ApiError, HotelApi};
pub use config::{ApiClientConfig, DEFAULT_BASE_URL};
pub use error::GuiError;
pub use http::{HttpHotelApi, query_pairs};
pub use store::{FetchOutcome, HotelFilters, HotelStore, StoreState};

// View exports
pub use debounce::Debouncer;
pub use form::{FormMode, HotelForm, HotelFormValues, SubmitOutcome};
pub use table::{
    Column, EDIT_ACTION_LABEL, EMPTY_MESSAGE, HotelTable, SEARCH_DEBOUNCE, SEARCH_PLACEHOLDER,
    SortDirection, SortState, TableRow, format_usd,
};

// Re-export commonly used types from hotel-admin-core for convenience
pub use hotel_admin_core::{Hotel, HotelField, HotelPage, ValidationErrors};
