//! URL resolution services for the application layer.

pub mod alias_url_provider;
pub mod url_service;

pub use alias_url_provider::{AliasUrlOptions, AliasUrlProvider, URL_ALIAS_PROPERTY};
pub use url_service::UrlService;
