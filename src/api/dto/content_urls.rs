//! DTOs for content URL lookup.

use serde::Serialize;

/// URLs resolving to a content node.
#[derive(Debug, Serialize)]
pub struct ContentUrlsResponse {
    pub id: i64,
    /// Primary URL, `null` when no provider offers one.
    pub url: Option<String>,
    pub other_urls: Vec<String>,
}
