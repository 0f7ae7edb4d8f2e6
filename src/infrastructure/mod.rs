//! Infrastructure layer for external integrations.
//!
//! Implements the collaborator traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`snapshot`] - In-memory content store and domain registry backed by a JSON snapshot

pub mod snapshot;
