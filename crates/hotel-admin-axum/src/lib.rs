//! Axum web adapter for hotel-admin.
//!
//! Serves `GET|POST|PUT /api/hotels` over `AppCore`, plus `/health` and
//! optional static serving of a built front-end bundle.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for integration-test infrastructure
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, DEFAULT_PORT, ServerConfig, bootstrap, build_app, spawn_local_server,
    start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
