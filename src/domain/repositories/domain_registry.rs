//! Lookup of domains registered against content nodes.

use crate::domain::entities::DomainAndUri;
use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// Registry of domain mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::snapshot::InMemoryDomainRegistry`] - JSON snapshot loaded at startup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRegistry: Send + Sync {
    /// Returns the domains registered against exactly `node_id`.
    ///
    /// Wildcard registrations are excluded. Bare domain names are resolved
    /// with the scheme of `current`, and domains matching the current host
    /// come first.
    ///
    /// Returns `Ok(None)` when the node has no usable registration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a registered name is not a valid URI.
    async fn domains_for_node(
        &self,
        node_id: i64,
        current: &Url,
    ) -> Result<Option<Vec<DomainAndUri>>, AppError>;

    /// Number of registrations (wildcards included), for health reporting.
    async fn count(&self) -> Result<usize, AppError>;
}
