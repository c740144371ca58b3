//! Optional bearer-token guard for `/api/*`.
//!
//! When the server is configured with an API token, every matched API
//! route requires `Authorization: Bearer <token>`. `/health` stays public.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

/// The exact `Authorization` value a request must carry.
pub fn expected_header(token: &str) -> Arc<str> {
    Arc::from(format!("Bearer {token}"))
}

/// Pass the request on when its `Authorization` header equals `expected`.
///
/// Anything else gets an empty 401 carrying `WWW-Authenticate: Bearer`.
pub async fn validate_bearer(
    expected: Arc<str>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth {
        Some(h) if h == expected.as_ref() => Ok(next.run(req).await),
        _ => {
            tracing::warn!(
                target: "hotel_admin.http",
                path = %req.uri().path(),
                "rejected request without a valid bearer token"
            );
            let mut res = Response::new(axum::body::Body::empty());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
            Ok(res)
        }
    }
}
