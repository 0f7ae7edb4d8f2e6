use std::sync::Arc;

use crate::application::services::{AliasUrlOptions, AliasUrlProvider, UrlService};
use crate::domain::UrlProvider;
use crate::domain::repositories::{ContentStore, DomainRegistry};
use crate::infrastructure::snapshot::{ContentSnapshot, InMemoryContentStore, InMemoryDomainRegistry};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub content_store: Arc<dyn ContentStore>,
    pub domain_registry: Arc<dyn DomainRegistry>,
    pub alias_lookup_enabled: bool,
    /// Rebuild the current request URI from X-Forwarded-* headers.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the snapshot-backed collaborators and the URL pipeline.
    pub fn from_snapshot(
        snapshot: &ContentSnapshot,
        alias_options: AliasUrlOptions,
        behind_proxy: bool,
    ) -> Self {
        let content_store = Arc::new(InMemoryContentStore::new(snapshot));
        let domain_registry = Arc::new(InMemoryDomainRegistry::new(snapshot));
        let alias_lookup_enabled = alias_options.enabled;

        let alias_provider: Arc<dyn UrlProvider> = Arc::new(AliasUrlProvider::new(
            content_store.clone(),
            domain_registry.clone(),
            alias_options,
        ));

        let url_service = Arc::new(UrlService::new(
            content_store.clone(),
            vec![alias_provider],
        ));

        Self {
            url_service,
            content_store,
            domain_registry,
            alias_lookup_enabled,
            behind_proxy,
        }
    }
}
