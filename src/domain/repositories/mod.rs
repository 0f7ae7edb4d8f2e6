//! Collaborator interfaces consumed by the resolver.
//!
//! These traits abstract the content management system the resolver runs
//! inside. Both are read-only.
//!
//! # Available Repositories
//!
//! - [`ContentStore`] - Published content nodes by identifier
//! - [`DomainRegistry`] - Domains registered against content nodes
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! Integration tests in `tests/` use the in-memory snapshot implementations.

pub mod content_store;
pub mod domain_registry;

pub use content_store::ContentStore;
pub use domain_registry::DomainRegistry;

#[cfg(test)]
pub use content_store::MockContentStore;
#[cfg(test)]
pub use domain_registry::MockDomainRegistry;
