//! Alternate URLs from the `urlAlias` content property.

use std::sync::Arc;

use crate::domain::UrlProvider;
use crate::domain::entities::{ContentNode, DomainAndUri};
use crate::domain::repositories::{ContentStore, DomainRegistry};
use crate::error::AppError;
use crate::utils::url_normalizer::{
    UrlOptions, combine_paths, left_part_path, normalize_for_public_use,
};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Content property holding the alias path fragment.
pub const URL_ALIAS_PROPERTY: &str = "urlAlias";

/// Settings the host computes once and hands to [`AliasUrlProvider`].
#[derive(Debug, Clone, Default)]
pub struct AliasUrlOptions {
    /// Whether lookup by alias is active in the host's routing setup.
    pub enabled: bool,
    pub url: UrlOptions,
}

/// Provides alternate URLs for nodes carrying a `urlAlias` property.
///
/// The alias is appended to every domain registered on the node or its
/// nearest ancestor that has one, or used as a site-relative path when no
/// ancestor has a domain. It never proposes a primary URL.
///
/// The alias text is used verbatim: it is not validated, escaped beyond URL
/// path encoding, or checked for collisions with other nodes.
pub struct AliasUrlProvider<C: ContentStore, D: DomainRegistry> {
    content_store: Arc<C>,
    domain_registry: Arc<D>,
    options: AliasUrlOptions,
}

impl<C: ContentStore, D: DomainRegistry> AliasUrlProvider<C, D> {
    /// Creates a new alias URL provider.
    pub fn new(content_store: Arc<C>, domain_registry: Arc<D>, options: AliasUrlOptions) -> Self {
        Self {
            content_store,
            domain_registry,
            options,
        }
    }

    /// Walks from `node` towards the root and returns the first domain set found.
    ///
    /// The node itself is checked first; ancestors are loaded only while no
    /// level has a registration.
    async fn domains_for_nearest(
        &self,
        node: ContentNode,
        current: &Url,
    ) -> Result<Option<Vec<DomainAndUri>>, AppError> {
        let mut node = node;

        loop {
            if let Some(domains) = self
                .domain_registry
                .domains_for_node(node.id, current)
                .await?
            {
                debug!(node_id = node.id, count = domains.len(), "Domains found");
                return Ok(Some(domains));
            }

            match node.parent_id {
                Some(parent_id) => node = self.content_store.get_by_id(parent_id).await?,
                None => return Ok(None),
            }
        }
    }
}

#[async_trait]
impl<C: ContentStore, D: DomainRegistry> UrlProvider for AliasUrlProvider<C, D> {
    fn name(&self) -> &'static str {
        "alias"
    }

    async fn url(&self, _node_id: i64, _current: &Url) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    async fn other_urls(&self, node_id: i64, current: &Url) -> Result<Vec<String>, AppError> {
        if !self.options.enabled {
            return Ok(Vec::new());
        }

        let node = self.content_store.get_by_id(node_id).await?;

        let alias = match node.property(URL_ALIAS_PROPERTY) {
            Some(alias) if !alias.trim().is_empty() => alias.to_string(),
            _ => {
                debug!(node_id, "No URL alias");
                return Ok(Vec::new());
            }
        };

        let path = format!("/{alias}");

        let Some(domains) = self.domains_for_nearest(node, current).await? else {
            let url = normalize_for_public_use(&path, &self.options.url)?;
            return Ok(vec![url]);
        };

        domains
            .iter()
            .map(|domain| {
                let combined = combine_paths(&left_part_path(&domain.uri), &path);
                normalize_for_public_use(&combined, &self.options.url).map_err(AppError::from)
            })
            .collect()
    }
}
