//! Core domain types and port definitions for hotel-admin.
//!
//! This crate owns everything that is independent of infrastructure:
//!
//! - `domain` - `Hotel`, `Room` and the list query/page types
//! - `validation` - the single hotel schema shared by the server and the forms
//! - `ports` - repository traits and semantic errors
//! - `services` - `HotelService` and the `AppCore` facade
//! - `paths` - data directory and database file resolution
//!
//! Adapters (`hotel-admin-db`, `hotel-admin-axum`, `hotel-admin-gui`,
//! `hotel-admin-cli`) depend on this crate, never the other way around.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Hotel, HotelFilter, HotelListQuery, HotelPage, HotelUpdate, NewHotel, PAGE_SIZE, Room,
    total_pages,
};
pub use paths::{PathError, ResolvedPaths, data_root, database_path};
pub use ports::{CoreError, HotelRepository, Repos, RepositoryError};
pub use services::{AppCore, HotelService};
pub use validation::{FieldError, HotelField, HotelSchema, ValidationErrors};
