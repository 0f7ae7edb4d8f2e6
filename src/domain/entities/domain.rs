//! Domain registrations: hostnames a content subtree is served at.

use crate::utils::url_normalizer::UrlNormalizationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A domain registered against a content node.
///
/// `name` is either a bare authority with optional path (`site.example/en`)
/// or a full URI (`https://site.example/en`). Wildcard registrations only
/// carry culture settings and never produce URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub root_node_id: i64,
    #[serde(default)]
    pub is_wildcard: bool,
}

impl Domain {
    /// Creates a non-wildcard domain registration.
    pub fn new(id: i64, name: impl Into<String>, root_node_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            root_node_id,
            is_wildcard: false,
        }
    }

    /// Creates a wildcard registration (`*1234` style).
    pub fn wildcard(id: i64, root_node_id: i64) -> Self {
        Self {
            id,
            name: format!("*{root_node_id}"),
            root_node_id,
            is_wildcard: true,
        }
    }
}

/// A domain registration resolved to an absolute base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAndUri {
    pub domain: Domain,
    pub uri: Url,
}

impl DomainAndUri {
    /// Resolves `domain` against the scheme of the current request.
    ///
    /// Bare names inherit `scheme`; names that already carry a scheme keep it.
    ///
    /// # Errors
    ///
    /// Returns [`UrlNormalizationError::InvalidFormat`] if the name does not
    /// form a valid URI.
    pub fn new(domain: Domain, scheme: &str) -> Result<Self, UrlNormalizationError> {
        let raw = if domain.name.contains("://") {
            domain.name.clone()
        } else {
            format!("{scheme}://{}", domain.name)
        };

        let uri = Url::parse(&raw).map_err(|e| {
            UrlNormalizationError::InvalidFormat(format!("domain '{}': {e}", domain.name))
        })?;

        Ok(Self { domain, uri })
    }
}
