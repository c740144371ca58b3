//! The HTTP surface: `/health`, `/api/hotels`, and optionally the
//! built admin panel as static files.

use axum::Router;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::auth::{expected_header, validate_bearer};
use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::handlers;
use crate::state::AppState;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config {
        CorsConfig::AllowAll => layer.allow_origin(Any),
        // Origins that are not valid header values are skipped.
        CorsConfig::AllowOrigins(origins) => layer.allow_origin(
            origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ),
    }
}

/// Routes mounted under `/api`, still waiting for their state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/hotels",
        get(handlers::hotels::list)
            .post(handlers::hotels::create)
            .put(handlers::hotels::update),
    )
}

/// Router for the JSON API and the health probe.
///
/// CORS covers `/api` only. With `config.api_token` set, matched `/api`
/// routes demand the bearer token while `/health` stays open.
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = cors_layer(&config.cors);

    let mut api = api_routes().with_state(state);
    if let Some(token) = &config.api_token {
        let expected = expected_header(token);
        api = api.route_layer(middleware::from_fn(move |req: Request, next: Next| {
            let expected = expected.clone();
            async move { validate_bearer(expected, req, next).await }
        }));
    }

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api.layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// [`create_router`] plus the admin panel's files from `static_dir`.
///
/// Unknown paths get `index.html` so client-side routes like `/hotels`
/// load the panel.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    config: &ServerConfig,
) -> Router {
    let root = static_dir.as_ref();
    let panel = ServeDir::new(root).fallback(ServeFile::new(root.join("index.html")));
    create_router(ctx, config).fallback_service(panel)
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}
