//! CLI bootstrap - the composition root for the client commands.
//!
//! This module is the ONLY place where the HTTP client is wired together:
//! - `HttpHotelApi` (via hotel-admin-gui) pointed at the configured server
//! - `HotelStore` over that API
//!
//! Command handlers receive the composed `CliContext` and work through the
//! store, the list view and the forms.

use std::sync::Arc;

use hotel_admin_gui::{ApiClientConfig, HotelApi, HotelStore, HttpHotelApi};

use crate::error::CliError;

/// Bootstrap configuration for the client commands.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Server origin, e.g. `http://127.0.0.1:8787`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
}

impl CliConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }
}

/// Fully composed context for client commands.
pub struct CliContext {
    store: Arc<HotelStore>,
}

impl CliContext {
    /// Build a context over any [`HotelApi`].
    pub fn with_api(api: Arc<dyn HotelApi>) -> Self {
        Self {
            store: Arc::new(HotelStore::new(api)),
        }
    }

    pub const fn store(&self) -> &Arc<HotelStore> {
        &self.store
    }
}

/// Compose the HTTP client and store for `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client_config = ApiClientConfig::new()
        .with_base_url(config.base_url.as_str())
        .with_optional_token(config.token.clone());
    let api = HttpHotelApi::new(&client_config)?;

    tracing::debug!(target: "hotel_admin.cli", endpoint = api.endpoint(), "client ready");
    Ok(CliContext::with_api(Arc::new(api)))
}
