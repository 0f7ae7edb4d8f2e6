//! In-memory domain registry over a loaded snapshot.

use super::loader::ContentSnapshot;
use crate::domain::entities::{Domain, DomainAndUri};
use crate::domain::repositories::DomainRegistry;
use crate::error::AppError;
use async_trait::async_trait;
use url::Url;

/// Domain registrations in snapshot order.
pub struct InMemoryDomainRegistry {
    domains: Vec<Domain>,
}

impl InMemoryDomainRegistry {
    /// Copies the registrations of `snapshot`.
    pub fn new(snapshot: &ContentSnapshot) -> Self {
        Self {
            domains: snapshot.domains.clone(),
        }
    }
}

#[async_trait]
impl DomainRegistry for InMemoryDomainRegistry {
    async fn domains_for_node(
        &self,
        node_id: i64,
        current: &Url,
    ) -> Result<Option<Vec<DomainAndUri>>, AppError> {
        let mut domains = self
            .domains
            .iter()
            .filter(|d| d.root_node_id == node_id && !d.is_wildcard)
            .map(|d| DomainAndUri::new(d.clone(), current.scheme()))
            .collect::<Result<Vec<_>, _>>()?;

        if domains.is_empty() {
            return Ok(None);
        }

        // stable: registration order within each group
        domains.sort_by_key(|d| {
            (
                d.uri.host_str() != current.host_str(),
                d.uri.scheme() != current.scheme(),
            )
        });

        Ok(Some(domains))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.domains.len())
    }
}
