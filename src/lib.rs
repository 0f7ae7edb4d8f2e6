//! # URL Alias Resolver
//!
//! Resolves alternate public URLs for content nodes from their `urlAlias`
//! property and the domains registered on the node or its nearest ancestor.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content entities, collaborator traits and the URL provider contract
//! - **Application Layer** ([`application`]) - The alias URL provider and the URL pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory content snapshot
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Resolution
//!
//! For a node with alias `my-alt-page`:
//!
//! - no domain on the node or any ancestor: `/my-alt-page`
//! - domains `http://a.example/en/` and `http://b.example/` on an ancestor:
//!   `http://a.example/en/my-alt-page` and `http://b.example/my-alt-page`
//!
//! The alias never produces a primary URL, and is used verbatim: no
//! validation, escaping beyond URL path encoding, or collision checks.
//!
//! ## Quick Start
//!
//! ```bash
//! export CONTENT_SNAPSHOT="data/content.sample.json"
//! export CONTENT_FINDERS="by-nice-url,by-url-alias"
//! cargo run
//! curl -H 'Host: site.example' http://localhost:3000/api/content/1100/urls
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AliasUrlOptions, AliasUrlProvider, UrlService};
    pub use crate::domain::UrlProvider;
    pub use crate::domain::entities::{ContentNode, Domain, DomainAndUri};
    pub use crate::domain::repositories::{ContentStore, DomainRegistry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::snapshot::{
        ContentSnapshot, InMemoryContentStore, InMemoryDomainRegistry,
    };
    pub use crate::state::AppState;
    pub use crate::utils::url_normalizer::UrlOptions;
}
