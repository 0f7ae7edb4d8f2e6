//! Content node entity read from the published content snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the published content tree.
///
/// Nodes are owned by the content store; the resolver only reads them.
/// A node without `parent_id` is a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl ContentNode {
    /// Creates a node without properties.
    pub fn new(id: i64, parent_id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property assignment, mostly for fixtures.
    pub fn with_property(mut self, alias: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(alias.into(), value.into());
        self
    }

    pub fn property(&self, alias: &str) -> Option<&str> {
        self.properties.get(alias).map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
