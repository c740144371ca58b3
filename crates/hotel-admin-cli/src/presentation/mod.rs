//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - View state (sorting, visibility, paging) lives in `HotelTable`

pub mod hotel_display;
pub mod tables;

// Re-export commonly used items
pub use hotel_display::hotel_summary;
pub use tables::{render_hotel_table, separator, truncate_string};
