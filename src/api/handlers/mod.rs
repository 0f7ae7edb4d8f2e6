//! HTTP request handlers for API endpoints.

pub mod content_urls;
pub mod health;

pub use content_urls::content_urls_handler;
pub use health::health_handler;
