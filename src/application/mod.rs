//! Application layer services implementing URL resolution.
//!
//! Services consume the domain layer's collaborator traits and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::alias_url_provider::AliasUrlProvider`] - Alternate URLs from the `urlAlias` property
//! - [`services::url_service::UrlService`] - Pipeline polling all URL providers

pub mod services;
