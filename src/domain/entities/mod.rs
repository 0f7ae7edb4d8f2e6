//! Core domain entities representing the content model.
//!
//! Entities are plain data structures read from the content snapshot.
//!
//! # Entity Types
//!
//! - [`ContentNode`] - A node in the published content tree
//! - [`Domain`] - A hostname registered against a content node
//! - [`DomainAndUri`] - A registration resolved to an absolute base URI

pub mod content_node;
pub mod domain;

pub use content_node::ContentNode;
pub use domain::{Domain, DomainAndUri};
