//! Contract between URL providers and the host's URL pipeline.

use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// A source of public URLs for content nodes.
///
/// The pipeline polls every registered provider: the first one returning a
/// primary URL wins, and alternate URLs from all providers are concatenated.
/// `Ok(None)` and an empty `Vec` mean the provider has nothing to say.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Primary URL of `node_id` in the context of `current`.
    async fn url(&self, node_id: i64, current: &Url) -> Result<Option<String>, AppError>;

    /// URLs that also resolve to `node_id` but that [`Self::url`] would not
    /// return in the current context.
    async fn other_urls(&self, node_id: i64, current: &Url) -> Result<Vec<String>, AppError>;
}
