//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, UI).
//!
//! # Structure
//!
//! - `hotel` - Hotel and room records (`Hotel`, `NewHotel`, `HotelUpdate`, `Room`)
//! - `query` - List query and page types (`HotelFilter`, `HotelListQuery`, `HotelPage`)

mod hotel;
mod query;

pub use hotel::{Hotel, HotelUpdate, NewHotel, Room};
pub use query::{HotelFilter, HotelListQuery, HotelPage, PAGE_SIZE, total_pages};
