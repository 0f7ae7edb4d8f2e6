//! Utility functions for URL processing and request handling.
//!
//! - [`url_normalizer`] - Public URL normalization and path combination
//! - [`request_uri`] - Current request URI reconstruction from HTTP headers

pub mod request_uri;
pub mod url_normalizer;
