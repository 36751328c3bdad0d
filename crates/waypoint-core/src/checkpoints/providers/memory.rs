//! In-memory checkpoint provider

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::super::provider::CheckpointProvider;
use super::super::types::{CheckpointId, CheckpointListItem, NamedCheckpoint, StoredCheckpoint};
use crate::error::CheckpointResult;

/// In-memory checkpoint storage
///
/// Ids are random UUIDs. Listing returns checkpoints in insertion order.
/// Contents are lost when the provider is dropped.
pub struct MemoryCheckpointProvider {
    checkpoints: RwLock<Vec<StoredCheckpoint>>,
}

impl MemoryCheckpointProvider {
    /// Create a new in-memory provider
    pub fn new() -> Self {
        Self {
            checkpoints: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored checkpoints
    pub async fn len(&self) -> usize {
        self.checkpoints.read().await.len()
    }

    /// Check if nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.checkpoints.read().await.is_empty()
    }
}

impl Default for MemoryCheckpointProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckpointProvider for MemoryCheckpointProvider {
    async fn store_checkpoint(
        &self,
        checkpoint: NamedCheckpoint,
    ) -> CheckpointResult<CheckpointId> {
        let id = CheckpointId::from_string(uuid::Uuid::new_v4().to_string());
        let mut checkpoints = self.checkpoints.write().await;
        checkpoints.push(StoredCheckpoint::new(id.clone(), checkpoint));
        tracing::debug!("Stored checkpoint {} in memory", id.short());
        Ok(id)
    }

    async fn retrieve_checkpoint(
        &self,
        id: &CheckpointId,
    ) -> CheckpointResult<Option<StoredCheckpoint>> {
        let checkpoints = self.checkpoints.read().await;
        Ok(checkpoints.iter().find(|cp| &cp.id == id).cloned())
    }

    async fn list_checkpoints(&self) -> CheckpointResult<Vec<CheckpointListItem>> {
        let checkpoints = self.checkpoints.read().await;
        Ok(checkpoints.iter().map(CheckpointListItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoints::types::{ChatMessage, CheckpointState};
    use std::collections::HashSet;

    fn named(name: &str) -> NamedCheckpoint {
        NamedCheckpoint::new(
            name,
            CheckpointState::new("agent-1")
                .with_tools(["read"])
                .with_message(ChatMessage::user(name)),
        )
    }

    #[tokio::test]
    async fn test_store_and_retrieve() {
        let provider = MemoryCheckpointProvider::new();
        let checkpoint = named("first");

        let id = provider.store_checkpoint(checkpoint.clone()).await.unwrap();
        let loaded = provider.retrieve_checkpoint(&id).await.unwrap().unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.checkpoint, checkpoint);
    }

    #[tokio::test]
    async fn test_retrieve_is_repeatable() {
        let provider = MemoryCheckpointProvider::new();
        let id = provider.store_checkpoint(named("same")).await.unwrap();

        let first = provider.retrieve_checkpoint(&id).await.unwrap();
        let second = provider.retrieve_checkpoint(&id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_retrieve_unknown_is_none() {
        let provider = MemoryCheckpointProvider::new();
        let loaded = provider
            .retrieve_checkpoint(&CheckpointId::from("missing"))
            .await
            .unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let provider = MemoryCheckpointProvider::new();
        let mut ids = HashSet::new();
        for _ in 0..50 {
            ids.insert(provider.store_checkpoint(named("dup")).await.unwrap());
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(provider.len().await, 50);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let provider = MemoryCheckpointProvider::new();
        assert!(provider.is_empty().await);

        let a = provider.store_checkpoint(named("a")).await.unwrap();
        let b = provider.store_checkpoint(named("b")).await.unwrap();

        let list = provider.list_checkpoints().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, a);
        assert_eq!(list[0].name, "a");
        assert_eq!(list[1].id, b);
        assert_eq!(list[1].agent_id, "agent-1");
    }
}
