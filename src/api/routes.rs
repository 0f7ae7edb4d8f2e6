//! API route configuration.

use crate::api::handlers::content_urls_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /content/{id}/urls` - Primary and alternate URLs of a content node
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/content/{id}/urls", get(content_urls_handler))
}
