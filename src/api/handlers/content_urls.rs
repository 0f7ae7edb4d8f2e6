//! Handler for content URL lookup.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::HeaderMap,
};

use crate::api::dto::content_urls::ContentUrlsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_uri::current_request_uri;

/// Returns the primary and alternate URLs of a content node.
///
/// # Endpoint
///
/// `GET /api/content/{id}/urls`
///
/// The current request URI (scheme and host) decides which domain mappings
/// are preferred and the scheme of bare domain names.
///
/// # Response
///
/// ```json
/// {
///   "id": 1234,
///   "url": null,
///   "other_urls": ["http://site.example/my-alt-page"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the Host header is missing or invalid.
/// Returns 404 if the content node does not exist.
pub async fn content_urls_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Json<ContentUrlsResponse>, AppError> {
    let current = current_request_uri(&headers, &uri, state.behind_proxy)?;

    state.url_service.ensure_exists(id).await?;

    let url = state.url_service.url(id, &current).await;
    let other_urls = state.url_service.other_urls(id, &current).await;

    tracing::debug!(id, current = %current, count = other_urls.len(), "Resolved content URLs");

    Ok(Json(ContentUrlsResponse {
        id,
        url,
        other_urls,
    }))
}
