//! # General Route Handlers
//!
//! The single page and the health check.

use axum::response::Html;

/// The page served at `/`.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
