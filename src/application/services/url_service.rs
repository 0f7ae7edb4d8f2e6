//! URL pipeline polling every registered provider.

use std::sync::Arc;

use crate::domain::UrlProvider;
use crate::domain::entities::ContentNode;
use crate::domain::repositories::ContentStore;
use crate::error::AppError;
use tracing::warn;
use url::Url;

/// Aggregates the URLs offered by a set of [`UrlProvider`]s.
///
/// A failing provider never fails the whole lookup: its error is logged and
/// its contribution skipped.
pub struct UrlService {
    content_store: Arc<dyn ContentStore>,
    providers: Vec<Arc<dyn UrlProvider>>,
}

impl UrlService {
    /// Creates a new URL service. Providers are polled in the given order.
    pub fn new(content_store: Arc<dyn ContentStore>, providers: Vec<Arc<dyn UrlProvider>>) -> Self {
        Self {
            content_store,
            providers,
        }
    }

    /// Loads the node, so callers can reject unknown identifiers up front.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the node is not published.
    pub async fn ensure_exists(&self, node_id: i64) -> Result<ContentNode, AppError> {
        self.content_store.get_by_id(node_id).await
    }

    /// Returns the first primary URL offered by a provider.
    pub async fn url(&self, node_id: i64, current: &Url) -> Option<String> {
        for provider in &self.providers {
            match provider.url(node_id, current).await {
                Ok(Some(url)) => return Some(url),
                Ok(None) => {}
                Err(e) => warn!(
                    provider = provider.name(),
                    node_id,
                    error = %e,
                    "URL provider failed, skipping"
                ),
            }
        }

        None
    }

    /// Returns the alternate URLs of all providers, in provider order.
    pub async fn other_urls(&self, node_id: i64, current: &Url) -> Vec<String> {
        let mut urls = Vec::new();

        for provider in &self.providers {
            match provider.other_urls(node_id, current).await {
                Ok(found) => urls.extend(found),
                Err(e) => warn!(
                    provider = provider.name(),
                    node_id,
                    error = %e,
                    "URL provider failed, skipping"
                ),
            }
        }

        urls
    }
}
