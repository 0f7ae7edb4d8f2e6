//! Reconstruction of the current request URI from HTTP headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;
use url::Url;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Rebuilds the absolute URI of the inbound request.
///
/// The authority comes from the `Host` header (port kept), the path and query
/// from `uri`. When `behind_proxy` is set, `X-Forwarded-Proto` and
/// `X-Forwarded-Host` take precedence; only the first value of a
/// comma-separated list is used. Without a forwarded scheme, `http` is assumed.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing
/// - A header value contains invalid UTF-8
/// - The resulting URI cannot be parsed
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let uri: Uri = "/api/content/1/urls".parse().unwrap();
/// let current = current_request_uri(&headers, &uri, false).unwrap();
/// assert_eq!(current.as_str(), "http://example.com:8080/api/content/1/urls");
/// ```
pub fn current_request_uri(
    headers: &HeaderMap,
    uri: &Uri,
    behind_proxy: bool,
) -> Result<Url, AppError> {
    let forwarded_host = if behind_proxy {
        forwarded_value(headers, FORWARDED_HOST)?
    } else {
        None
    };

    let host = match forwarded_host {
        Some(host) => host,
        None => headers
            .get(header::HOST)
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .to_string(),
    };

    let forwarded_proto = if behind_proxy {
        forwarded_value(headers, FORWARDED_PROTO)?
    } else {
        None
    };
    let scheme = forwarded_proto.unwrap_or_else(|| "http".to_string());

    let path_and_query = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");

    Url::parse(&format!("{scheme}://{host}{path_and_query}")).map_err(|e| {
        AppError::bad_request(
            "Invalid request URI",
            json!({ "host": host, "reason": e.to_string() }),
        )
    })
}

fn forwarded_value(headers: &HeaderMap, name: &str) -> Result<Option<String>, AppError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| {
        AppError::bad_request("Invalid forwarded header", json!({ "header": name }))
    })?;

    Ok(value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_ascii_lowercase))
}
