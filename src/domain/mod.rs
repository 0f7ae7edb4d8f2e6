//! Domain layer containing the content model and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Content nodes and domain registrations
//! - [`repositories`] - Read-only content store and domain registry traits
//! - [`url_provider`] - The provider contract polled by the URL pipeline
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Resolution logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod url_provider;

pub use url_provider::UrlProvider;

#[cfg(test)]
pub use url_provider::MockUrlProvider;
