//! Public URL normalization and path combination.
//!
//! Every URL the service hands out goes through [`normalize_for_public_use`],
//! so alias URLs follow the same trailing-slash, extension and virtual
//! directory rules as the host's canonical URLs.

use url::{Position, Url};

/// Placeholder origin used to percent-encode site-relative paths.
const RELATIVE_BASE: &str = "http://localhost/";

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Host conventions applied to outgoing URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOptions {
    /// Extensionless URLs. When false, [`Self::url_extension`] is appended.
    pub use_directory_urls: bool,
    /// Append `/` to directory URLs (ignored when directory URLs are off).
    pub add_trailing_slash: bool,
    pub url_extension: String,
    /// Virtual directory the application is mounted under, e.g. `/cms`.
    pub application_path: String,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            use_directory_urls: true,
            add_trailing_slash: false,
            url_extension: ".aspx".to_string(),
            application_path: "/".to_string(),
        }
    }
}

/// Normalizes a URL for public use.
///
/// Accepts either an absolute `http`/`https` URL or a site-relative path
/// starting with `/`. Relative input yields a relative result.
///
/// # Normalization Rules
///
/// 1. **Root**: a path of exactly `/` is never suffixed
/// 2. **Extension**: appended when directory URLs are disabled
/// 3. **Trailing slash**: appended when configured and directory URLs are on
/// 4. **Virtual directory**: `application_path` is prefixed to the path
/// 5. **Encoding**: path characters are percent-encoded the way [`Url`] does
///
/// Scheme and host casing and default ports follow [`Url`] serialization.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// let options = UrlOptions::default();
/// assert_eq!(
///     normalize_for_public_use("HTTP://Site.Example:80/foo", &options).unwrap(),
///     "http://site.example/foo"
/// );
/// assert_eq!(normalize_for_public_use("/foo", &options).unwrap(), "/foo");
/// ```
pub fn normalize_for_public_use(
    input: &str,
    options: &UrlOptions,
) -> Result<String, UrlNormalizationError> {
    if input.starts_with('/') {
        return normalize_relative(input, options);
    }

    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let path = apply_path_rules(url.path(), options);
    url.set_path(&path);

    Ok(url.to_string())
}

fn normalize_relative(input: &str, options: &UrlOptions) -> Result<String, UrlNormalizationError> {
    let mut url = Url::parse(RELATIVE_BASE)
        .map_err(|e| UrlNormalizationError::NormalizationFailed(e.to_string()))?;

    // split the way an absolute URL parses, so `?` and `#` never land in the path
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (input, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    url.set_path(path);
    url.set_query(query);
    url.set_fragment(fragment);

    let path = apply_path_rules(url.path(), options);
    url.set_path(&path);

    Ok(url[Position::BeforePath..].to_string())
}

fn apply_path_rules(path: &str, options: &UrlOptions) -> String {
    let mut path = path.to_string();

    if path != "/" {
        if !options.use_directory_urls {
            path.push_str(&options.url_extension);
        } else if options.add_trailing_slash {
            path.push('/');
        }
    }

    let prefix = options.application_path.trim_end_matches('/');
    format!("{prefix}{path}")
}

/// Joins a base URL and a path at a single slash.
///
/// Trailing slashes of `base` are dropped before `path` is appended, then
/// trailing slashes of the result are dropped unless the whole result is `/`.
pub fn combine_paths(base: &str, path: &str) -> String {
    let combined = format!("{}{}", base.trim_end_matches('/'), path);
    if combined == "/" {
        combined
    } else {
        combined.trim_end_matches('/').to_string()
    }
}

/// Returns scheme, authority and path of `uri`, without query or fragment.
pub fn left_part_path(uri: &Url) -> String {
    let mut uri = uri.clone();
    uri.set_query(None);
    uri.set_fragment(None);
    uri.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> UrlOptions {
        UrlOptions::default()
    }

    #[test]
    fn test_normalize_relative_path() {
        let result = normalize_for_public_use("/my-alt-page", &options());
        assert_eq!(result.unwrap(), "/my-alt-page");
    }

    #[test]
    fn test_normalize_relative_root_untouched() {
        let opts = UrlOptions {
            add_trailing_slash: true,
            ..options()
        };
        assert_eq!(normalize_for_public_use("/", &opts).unwrap(), "/");
    }

    #[test]
    fn test_normalize_relative_with_trailing_slash() {
        let opts = UrlOptions {
            add_trailing_slash: true,
            ..options()
        };
        assert_eq!(normalize_for_public_use("/foo", &opts).unwrap(), "/foo/");
    }

    #[test]
    fn test_normalize_relative_without_directory_urls() {
        let opts = UrlOptions {
            use_directory_urls: false,
            add_trailing_slash: true,
            ..options()
        };
        assert_eq!(normalize_for_public_use("/foo", &opts).unwrap(), "/foo.aspx");
    }

    #[test]
    fn test_normalize_relative_with_application_path() {
        let opts = UrlOptions {
            application_path: "/cms/".to_string(),
            ..options()
        };
        assert_eq!(normalize_for_public_use("/foo", &opts).unwrap(), "/cms/foo");
    }

    #[test]
    fn test_normalize_relative_keeps_query_and_fragment_out_of_path() {
        let opts = UrlOptions {
            add_trailing_slash: true,
            ..options()
        };
        assert_eq!(normalize_for_public_use("/foo?x=1", &opts).unwrap(), "/foo/?x=1");
        assert_eq!(normalize_for_public_use("/foo#top", &opts).unwrap(), "/foo/#top");
        assert_eq!(
            normalize_for_public_use("http://site.example/foo?x=1", &opts).unwrap(),
            "http://site.example/foo/?x=1"
        );
    }

    #[test]
    fn test_normalize_relative_encodes_spaces() {
        let result = normalize_for_public_use("/my page", &options());
        assert_eq!(result.unwrap(), "/my%20page");
    }

    #[test]
    fn test_normalize_absolute_lowercases_host() {
        let result = normalize_for_public_use("http://SiteA.Example/base/foo", &options());
        assert_eq!(result.unwrap(), "http://sitea.example/base/foo");
    }

    #[test]
    fn test_normalize_absolute_drops_default_port() {
        let result = normalize_for_public_use("https://site.example:443/foo", &options());
        assert_eq!(result.unwrap(), "https://site.example/foo");
    }

    #[test]
    fn test_normalize_absolute_keeps_custom_port() {
        let result = normalize_for_public_use("http://site.example:8080/foo", &options());
        assert_eq!(result.unwrap(), "http://site.example:8080/foo");
    }

    #[test]
    fn test_normalize_absolute_root_stays_root() {
        let opts = UrlOptions {
            use_directory_urls: false,
            ..options()
        };
        let result = normalize_for_public_use("http://site.example", &opts);
        assert_eq!(result.unwrap(), "http://site.example/");
    }

    #[test]
    fn test_normalize_absolute_with_extension() {
        let opts = UrlOptions {
            use_directory_urls: false,
            ..options()
        };
        let result = normalize_for_public_use("http://site.example/foo", &opts);
        assert_eq!(result.unwrap(), "http://site.example/foo.aspx");
    }

    #[test]
    fn test_normalize_absolute_with_application_path() {
        let opts = UrlOptions {
            application_path: "/cms".to_string(),
            add_trailing_slash: true,
            ..options()
        };
        let result = normalize_for_public_use("http://site.example/foo", &opts);
        assert_eq!(result.unwrap(), "http://site.example/cms/foo/");
    }

    #[test]
    fn test_normalize_invalid_url() {
        let result = normalize_for_public_use("not a valid url", &options());
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_normalize_ftp_protocol() {
        let result = normalize_for_public_use("ftp://site.example/file", &options());
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_combine_paths_single_slash() {
        assert_eq!(
            combine_paths("http://site.example/base/", "/foo"),
            "http://site.example/base/foo"
        );
        assert_eq!(
            combine_paths("http://site.example/base", "/foo"),
            "http://site.example/base/foo"
        );
    }

    #[test]
    fn test_combine_paths_double_trailing_slash() {
        assert_eq!(
            combine_paths("http://site.example/base//", "/foo"),
            combine_paths("http://site.example/base", "/foo")
        );
    }

    #[test]
    fn test_combine_paths_trims_result() {
        assert_eq!(
            combine_paths("http://site.example/", "/foo/"),
            "http://site.example/foo"
        );
    }

    #[test]
    fn test_combine_paths_root_collapse() {
        assert_eq!(combine_paths("/", "/"), "/");
        assert_eq!(combine_paths("", "/"), "/");
    }

    #[test]
    fn test_left_part_path_strips_query_and_fragment() {
        let uri = Url::parse("http://site.example/base/?lang=en#top").unwrap();
        assert_eq!(left_part_path(&uri), "http://site.example/base/");
    }
}
