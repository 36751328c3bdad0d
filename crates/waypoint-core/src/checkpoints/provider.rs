//! Storage provider interface
//!
//! Providers persist checkpoints. The service consumes them through this
//! trait only and passes any error they return straight to the caller.

use async_trait::async_trait;

use super::types::{CheckpointId, CheckpointListItem, NamedCheckpoint, StoredCheckpoint};
use crate::error::CheckpointResult;

/// Trait for checkpoint storage backends
#[async_trait]
pub trait CheckpointProvider: Send + Sync {
    /// Persist a checkpoint and return a newly generated, globally unique id
    async fn store_checkpoint(
        &self,
        checkpoint: NamedCheckpoint,
    ) -> CheckpointResult<CheckpointId>;

    /// Load exactly what was stored under `id`
    ///
    /// Returns `Ok(None)` when the id is unknown; "not found" is never an error
    /// at this layer.
    async fn retrieve_checkpoint(
        &self,
        id: &CheckpointId,
    ) -> CheckpointResult<Option<StoredCheckpoint>>;

    /// List every stored checkpoint without its state payload
    ///
    /// Ordering is provider-defined.
    async fn list_checkpoints(&self) -> CheckpointResult<Vec<CheckpointListItem>>;
}
