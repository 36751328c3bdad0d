//! Host agent capability required by the checkpoint service

use super::types::{CheckpointState, StoredCheckpoint};
use crate::error::CheckpointResult;

/// State capture and replacement hooks a host agent exposes
///
/// The service receives an implementation as a parameter on every call, so a
/// test double only needs these two methods.
pub trait CheckpointAgent: Send + Sync {
    /// Capture the current state as a self-contained snapshot
    ///
    /// The returned value must not share anything with the live agent that
    /// could change after the call returns.
    fn generate_checkpoint(&self) -> CheckpointState;

    /// Replace the agent's state with the checkpoint's
    ///
    /// Enabled tools, enabled hooks, custom state, messages and the last
    /// response id are all overwritten, never merged. Implementations must
    /// apply the replacement atomically: if this returns an error the service
    /// cannot roll anything back.
    fn restore_checkpoint(&mut self, checkpoint: &StoredCheckpoint) -> CheckpointResult<()>;
}
