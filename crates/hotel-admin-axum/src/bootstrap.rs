//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use hotel_admin_core::paths::database_path;
use hotel_admin_core::services::AppCore;
use hotel_admin_db::{CoreFactory, SqlitePool, setup_database};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Default port of the HTTP server.
pub const DEFAULT_PORT: u16 = 8787;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file; `None` resolves `<data root>/data/hotel-admin.db`.
    pub database_path: Option<PathBuf>,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Bearer token required on `/api/*` when set.
    pub api_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: None,
            static_dir: None,
            cors: CorsConfig::default(),
            api_token: None,
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Require `Authorization: Bearer <token>` on `/api/*`.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }

    /// Wire the `SQLite` repositories over an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(CoreFactory::build_app_core(pool)))
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };

    tracing::info!(
        target: "hotel_admin.paths",
        database_path = %db_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(AxumContext::from_pool(pool))
}

/// Build the router for `config`, with SPA serving when a static
/// directory is configured.
pub fn build_app(ctx: AxumContext, config: &ServerConfig) -> axum::Router {
    if let Some(static_dir) = &config.static_dir {
        tracing::info!(target: "hotel_admin.http", "Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, config)
    } else {
        crate::routes::create_router(ctx, config)
    }
}

/// Start the web server on the configured port and serve until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = build_app(ctx, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        target: "hotel_admin.http",
        auth_enabled = config.api_token.is_some(),
        ui = config.static_dir.is_some(),
        "hotel-admin listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Serve `ctx` on an ephemeral localhost port in a background task.
///
/// Returns the bound address and the server task handle.
pub async fn spawn_local_server(
    ctx: AxumContext,
    config: &ServerConfig,
) -> Result<(SocketAddr, JoinHandle<()>)> {
    let app = build_app(ctx, config);
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tracing::info!(target: "hotel_admin.http", port = addr.port(), "Starting local API server");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(target: "hotel_admin.http", error = %e, "Local API server error");
        }
    });

    Ok((addr, handle))
}
