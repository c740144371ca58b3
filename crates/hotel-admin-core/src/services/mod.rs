//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod hotel_service;

pub use app_core::AppCore;
pub use hotel_service::{HotelService, MISSING_ID_MESSAGE};
