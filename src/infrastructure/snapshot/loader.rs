//! Snapshot file format and structural checks.

use crate::domain::entities::{ContentNode, Domain};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Errors raised while loading a content snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate content node id {0}")]
    DuplicateNode(i64),

    #[error("Content node {node} references unknown parent {parent}")]
    UnknownParent { node: i64, parent: i64 },

    #[error("Domain '{domain}' references unknown content node {node}")]
    UnknownRoot { domain: String, node: i64 },

    #[error("Content node {0} is part of a parent cycle")]
    Cycle(i64),
}

/// Content tree and domain registrations as stored on disk.
///
/// ```json
/// {
///   "nodes": [
///     { "id": 1, "name": "Home" },
///     { "id": 2, "parent_id": 1, "name": "About", "properties": { "urlAlias": "about-us" } }
///   ],
///   "domains": [
///     { "id": 1, "name": "site.example", "root_node_id": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub nodes: Vec<ContentNode>,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl ContentSnapshot {
    /// Parses and checks a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] for malformed JSON, or a structural
    /// error (see [`Self::validate`]).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reads, parses and checks a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read, otherwise
    /// see [`Self::from_json`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let snapshot = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            nodes = snapshot.nodes.len(),
            domains = snapshot.domains.len(),
            "Content snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Checks that the tree is well formed.
    ///
    /// - node ids are unique
    /// - every parent and domain root exists
    /// - no node is its own ancestor
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut parents: HashMap<i64, Option<i64>> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if parents.insert(node.id, node.parent_id).is_some() {
                return Err(SnapshotError::DuplicateNode(node.id));
            }
        }

        for node in &self.nodes {
            if let Some(parent) = node.parent_id
                && !parents.contains_key(&parent)
            {
                return Err(SnapshotError::UnknownParent {
                    node: node.id,
                    parent,
                });
            }
        }

        for domain in &self.domains {
            if !parents.contains_key(&domain.root_node_id) {
                return Err(SnapshotError::UnknownRoot {
                    domain: domain.name.clone(),
                    node: domain.root_node_id,
                });
            }
        }

        let mut acyclic: HashSet<i64> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let mut path = HashSet::new();
            let mut cursor = Some(node.id);

            while let Some(id) = cursor {
                if acyclic.contains(&id) {
                    break;
                }
                if !path.insert(id) {
                    return Err(SnapshotError::Cycle(id));
                }
                cursor = parents.get(&id).copied().flatten();
            }

            acyclic.extend(path);
        }

        Ok(())
    }
}
