//! In-memory content store over a loaded snapshot.

use super::loader::ContentSnapshot;
use crate::domain::entities::ContentNode;
use crate::domain::repositories::ContentStore;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;

/// Content store indexed by node id.
///
/// Immutable after construction; safe to share across requests.
pub struct InMemoryContentStore {
    nodes: HashMap<i64, ContentNode>,
}

impl InMemoryContentStore {
    /// Indexes the nodes of `snapshot`.
    pub fn new(snapshot: &ContentSnapshot) -> Self {
        let nodes = snapshot
            .nodes
            .iter()
            .map(|node| (node.id, node.clone()))
            .collect();

        Self { nodes }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get_by_id(&self, id: i64) -> Result<ContentNode, AppError> {
        self.nodes
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Content node not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.nodes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryContentStore {
        InMemoryContentStore::new(&ContentSnapshot {
            nodes: vec![
                ContentNode::new(1, None, "Home"),
                ContentNode::new(2, Some(1), "About"),
            ],
            domains: Vec::new(),
        })
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let node = store().get_by_id(2).await.unwrap();

        assert_eq!(node.name, "About");
        assert_eq!(node.parent_id, Some(1));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let result = store().get_by_id(3).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        assert_eq!(store().count().await.unwrap(), 2);
    }
}
