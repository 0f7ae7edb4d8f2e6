//! Read-only access to the published content tree.

use crate::domain::entities::ContentNode;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only view of the published content snapshot.
///
/// # Implementations
///
/// - [`crate::infrastructure::snapshot::InMemoryContentStore`] - JSON snapshot loaded at startup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Finds a node by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the node is not published.
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn get_by_id(&self, id: i64) -> Result<ContentNode, AppError>;

    /// Number of published nodes, for health reporting.
    async fn count(&self) -> Result<usize, AppError>;
}
