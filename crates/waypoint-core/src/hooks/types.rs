//! Hook traits

use async_trait::async_trait;
use std::sync::Arc;

use crate::checkpoints::CheckpointAgent;
use crate::error::CheckpointResult;

/// Behavior the host runs at fixed points of its input loop
#[async_trait]
pub trait AgentHook: Send + Sync {
    /// Unique hook name
    fn name(&self) -> &str;

    /// Short description for listings
    fn description(&self) -> &str {
        ""
    }

    /// Called by the host once an input has been fully processed
    async fn after_input_complete(
        &self,
        input: &str,
        agent: &dyn CheckpointAgent,
    ) -> CheckpointResult<()>;
}

/// Hook management capability provided by the host
pub trait HookManager: Send + Sync {
    /// Register a hook, replacing one with the same name; new hooks start disabled
    fn register_hook(&self, hook: Arc<dyn AgentHook>) -> CheckpointResult<()>;

    /// Enable a registered hook
    fn enable_hook(&self, name: &str) -> CheckpointResult<()>;

    /// Disable a registered hook
    fn disable_hook(&self, name: &str) -> CheckpointResult<()>;

    /// Check if a hook is registered and enabled
    fn is_enabled(&self, name: &str) -> bool;
}
