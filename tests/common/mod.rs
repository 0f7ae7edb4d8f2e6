#![allow(dead_code)]

use url::Url;
use url_alias_resolver::application::services::{AliasUrlOptions, URL_ALIAS_PROPERTY};
use url_alias_resolver::domain::entities::{ContentNode, Domain};
use url_alias_resolver::infrastructure::snapshot::ContentSnapshot;
use url_alias_resolver::state::AppState;
use url_alias_resolver::utils::url_normalizer::UrlOptions;

/// Fixture tree:
///
/// ```text
/// 1000 Site            domains: http://siteA.example/base/, http://siteB.example/, *1000
/// ├── 1100 About       alias "foo"
/// │   └── 1110 Team    alias "team"
/// ├── 1200 Plain
/// ├── 1300 Blank       alias "   "
/// └── 1400 Own         alias "own-page", domain own.example
/// 2000 Orphan
/// └── 2100 Page        alias "foo"
/// 3000 Root alias      alias "/", domain http://site.example
/// ```
pub fn snapshot() -> ContentSnapshot {
    ContentSnapshot {
        nodes: vec![
            ContentNode::new(1000, None, "Site"),
            ContentNode::new(1100, Some(1000), "About").with_property(URL_ALIAS_PROPERTY, "foo"),
            ContentNode::new(1110, Some(1100), "Team").with_property(URL_ALIAS_PROPERTY, "team"),
            ContentNode::new(1200, Some(1000), "Plain"),
            ContentNode::new(1300, Some(1000), "Blank").with_property(URL_ALIAS_PROPERTY, "   "),
            ContentNode::new(1400, Some(1000), "Own")
                .with_property(URL_ALIAS_PROPERTY, "own-page"),
            ContentNode::new(2000, None, "Orphan"),
            ContentNode::new(2100, Some(2000), "Page").with_property(URL_ALIAS_PROPERTY, "foo"),
            ContentNode::new(3000, None, "Root alias").with_property(URL_ALIAS_PROPERTY, "/"),
        ],
        domains: vec![
            Domain::new(1, "http://siteA.example/base/", 1000),
            Domain::wildcard(2, 1000),
            Domain::new(3, "http://siteB.example/", 1000),
            Domain::new(4, "own.example", 1400),
            Domain::new(5, "http://site.example", 3000),
        ],
    }
}

pub fn enabled() -> AliasUrlOptions {
    AliasUrlOptions {
        enabled: true,
        url: UrlOptions::default(),
    }
}

pub fn disabled() -> AliasUrlOptions {
    AliasUrlOptions {
        enabled: false,
        url: UrlOptions::default(),
    }
}

pub fn create_test_state(options: AliasUrlOptions) -> AppState {
    AppState::from_snapshot(&snapshot(), options, false)
}

pub fn current(uri: &str) -> Url {
    Url::parse(uri).unwrap()
}

/// A request URI unrelated to any registered domain.
pub fn unrelated() -> Url {
    current("http://unrelated.example/")
}
