//! Published content snapshot.
//!
//! The snapshot is read once at startup and never mutated, so every request
//! observes the same tree. Provides:
//! - [`ContentSnapshot`] - JSON loading and structural checks
//! - [`InMemoryContentStore`] - [`crate::domain::repositories::ContentStore`] over the snapshot
//! - [`InMemoryDomainRegistry`] - [`crate::domain::repositories::DomainRegistry`] over the snapshot

mod content_store;
mod domain_registry;
mod loader;

pub use content_store::InMemoryContentStore;
pub use domain_registry::InMemoryDomainRegistry;
pub use loader::{ContentSnapshot, SnapshotError};
