//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that parse the request and delegate to
//! `AppCore`.

pub mod hotels;
