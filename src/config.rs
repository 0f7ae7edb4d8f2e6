//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export CONTENT_SNAPSHOT="data/content.json"
//! export CONTENT_FINDERS="by-nice-url,by-id-path,by-url-alias"
//! export ADD_TRAILING_SLASH="true"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-*` headers (default: `false`)
//! - `CONTENT_SNAPSHOT` - Path of the JSON content snapshot (default: `content.json`)
//! - `CONTENT_FINDERS` - Comma-separated content finders (default: `by-nice-url,by-id-path`)
//! - `NOT_FOUND_HANDLERS` - Comma-separated legacy not-found handlers (default: empty)
//! - `USE_DIRECTORY_URLS` - Extensionless URLs (default: `true`)
//! - `ADD_TRAILING_SLASH` - Append `/` to directory URLs (default: `false`)
//! - `URL_EXTENSION` - Extension used when directory URLs are off (default: `.aspx`)
//! - `APPLICATION_PATH` - Virtual directory prefix (default: `/`)

use crate::application::services::AliasUrlOptions;
use crate::utils::url_normalizer::UrlOptions;
use anyhow::Result;
use std::env;

/// Content finder resolving requests by `urlAlias`.
pub const FINDER_BY_URL_ALIAS: &str = "by-url-alias";
/// Content finder delegating to the legacy not-found handlers.
pub const FINDER_BY_NOT_FOUND_HANDLERS: &str = "by-not-found-handlers";
/// Legacy not-found handler searching by `urlAlias`.
pub const HANDLER_SEARCH_FOR_ALIAS: &str = "search-for-alias";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, the current request URI is rebuilt from X-Forwarded-Proto / X-Forwarded-Host.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub content_snapshot: String,
    /// Content finders registered in the host's routing pipeline, lowercased.
    pub content_finders: Vec<String>,
    /// Legacy not-found handlers, lowercased.
    pub not_found_handlers: Vec<String>,

    // ── Public URL style ────────────────────────────────────────────────────
    pub use_directory_urls: bool,
    pub add_trailing_slash: bool,
    pub url_extension: String,
    pub application_path: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let behind_proxy = env_flag("BEHIND_PROXY", false);

        let content_snapshot =
            env::var("CONTENT_SNAPSHOT").unwrap_or_else(|_| "content.json".to_string());

        let content_finders = parse_list(
            &env::var("CONTENT_FINDERS").unwrap_or_else(|_| "by-nice-url,by-id-path".to_string()),
        );
        let not_found_handlers = parse_list(&env::var("NOT_FOUND_HANDLERS").unwrap_or_default());

        let use_directory_urls = env_flag("USE_DIRECTORY_URLS", true);
        let add_trailing_slash = env_flag("ADD_TRAILING_SLASH", false);
        let url_extension = env::var("URL_EXTENSION").unwrap_or_else(|_| ".aspx".to_string());
        let application_path = env::var("APPLICATION_PATH").unwrap_or_else(|_| "/".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            content_snapshot,
            content_finders,
            not_found_handlers,
            use_directory_urls,
            add_trailing_slash,
            url_extension,
            application_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `content_snapshot` is empty
    /// - `application_path` does not start with `/`
    /// - `url_extension` is empty while directory URLs are off
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.content_snapshot.trim().is_empty() {
            anyhow::bail!("CONTENT_SNAPSHOT must not be empty");
        }

        if !self.application_path.starts_with('/') {
            anyhow::bail!(
                "APPLICATION_PATH must start with '/', got '{}'",
                self.application_path
            );
        }

        if !self.use_directory_urls && self.url_extension.is_empty() {
            anyhow::bail!("URL_EXTENSION must not be empty when USE_DIRECTORY_URLS is false");
        }

        Ok(())
    }

    /// Returns whether lookup by URL alias is active.
    ///
    /// True when the alias content finder is registered, or when the legacy
    /// not-found pipeline is registered together with its alias handler.
    pub fn alias_lookup_enabled(&self) -> bool {
        let has_finder = self.has_finder(FINDER_BY_URL_ALIAS);
        let has_handler = self.has_finder(FINDER_BY_NOT_FOUND_HANDLERS)
            && self
                .not_found_handlers
                .iter()
                .any(|h| h == HANDLER_SEARCH_FOR_ALIAS);
        has_finder || has_handler
    }

    fn has_finder(&self, name: &str) -> bool {
        self.content_finders.iter().any(|f| f == name)
    }

    /// Public URL style shared by every URL provider.
    pub fn url_options(&self) -> UrlOptions {
        UrlOptions {
            use_directory_urls: self.use_directory_urls,
            add_trailing_slash: self.add_trailing_slash,
            url_extension: self.url_extension.clone(),
            application_path: self.application_path.clone(),
        }
    }

    /// Settings for [`crate::application::services::AliasUrlProvider`].
    pub fn alias_url_options(&self) -> AliasUrlOptions {
        AliasUrlOptions {
            enabled: self.alias_lookup_enabled(),
            url: self.url_options(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Content snapshot: {}", self.content_snapshot);
        tracing::info!("  Content finders: {}", self.content_finders.join(", "));
        tracing::info!(
            "  Alias lookup: {}",
            if self.alias_lookup_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!(
            "  URL style: directory={} trailing_slash={} application_path={}",
            self.use_directory_urls,
            self.add_trailing_slash,
            self.application_path
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

/// Splits a comma-separated list, trimming and lowercasing entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            content_snapshot: "content.json".to_string(),
            content_finders: vec!["by-nice-url".to_string()],
            not_found_handlers: Vec::new(),
            use_directory_urls: true,
            add_trailing_slash: false,
            url_extension: ".aspx".to_string(),
            application_path: "/".to_string(),
        }
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" By-Url-Alias , ,by-nice-url,"),
            vec!["by-url-alias", "by-nice-url"]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_alias_lookup_disabled_by_default() {
        assert!(!config().alias_lookup_enabled());
    }

    #[test]
    fn test_alias_lookup_enabled_by_finder() {
        let mut config = config();
        config.content_finders.push(FINDER_BY_URL_ALIAS.to_string());

        assert!(config.alias_lookup_enabled());
        assert!(config.alias_url_options().enabled);
    }

    #[test]
    fn test_alias_lookup_enabled_by_not_found_handler() {
        let mut config = config();
        config
            .content_finders
            .push(FINDER_BY_NOT_FOUND_HANDLERS.to_string());
        assert!(!config.alias_lookup_enabled());

        config
            .not_found_handlers
            .push(HANDLER_SEARCH_FOR_ALIAS.to_string());
        assert!(config.alias_lookup_enabled());
    }

    #[test]
    fn test_alias_handler_without_pipeline_is_ignored() {
        let mut config = config();
        config
            .not_found_handlers
            .push(HANDLER_SEARCH_FOR_ALIAS.to_string());

        assert!(!config.alias_lookup_enabled());
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.application_path = "cms".to_string();
        assert!(config.validate().is_err());
        config.application_path = "/cms".to_string();

        config.use_directory_urls = false;
        config.url_extension = String::new();
        assert!(config.validate().is_err());
        config.url_extension = ".html".to_string();
        assert!(config.validate().is_ok());

        config.content_snapshot = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_options_mapping() {
        let mut config = config();
        config.add_trailing_slash = true;
        config.application_path = "/cms".to_string();

        let options = config.url_options();

        assert!(options.use_directory_urls);
        assert!(options.add_trailing_slash);
        assert_eq!(options.application_path, "/cms");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_finders() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CONTENT_FINDERS", "by-nice-url, BY-NOT-FOUND-HANDLERS");
            env::set_var("NOT_FOUND_HANDLERS", "search-for-alias");
            env::set_var("ADD_TRAILING_SLASH", "1");
        }

        let config = Config::from_env().unwrap();

        assert!(config.alias_lookup_enabled());
        assert!(config.add_trailing_slash);

        // Cleanup
        unsafe {
            env::remove_var("CONTENT_FINDERS");
            env::remove_var("NOT_FOUND_HANDLERS");
            env::remove_var("ADD_TRAILING_SLASH");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("CONTENT_FINDERS");
            env::remove_var("NOT_FOUND_HANDLERS");
            env::remove_var("USE_DIRECTORY_URLS");
            env::remove_var("APPLICATION_PATH");
        }

        let config = Config::from_env().unwrap();

        assert!(!config.alias_lookup_enabled());
        assert!(config.use_directory_urls);
        assert_eq!(config.application_path, "/");
        assert_eq!(config.url_extension, ".aspx");
    }
}
