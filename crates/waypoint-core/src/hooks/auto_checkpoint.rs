//! Auto-checkpoint hook

use async_trait::async_trait;
use std::sync::Arc;

use super::types::AgentHook;
use crate::checkpoints::{CheckpointAgent, CheckpointService};
use crate::error::CheckpointResult;

/// Name under which the auto-checkpoint hook is registered
pub const AUTO_CHECKPOINT_HOOK: &str = "auto-checkpoint";

const EMPTY_INPUT_NAME: &str = "(empty input)";

/// Saves a checkpoint after every processed input, named after the input
pub struct AutoCheckpointHook {
    service: Arc<CheckpointService>,
}

impl AutoCheckpointHook {
    pub fn new(service: Arc<CheckpointService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AgentHook for AutoCheckpointHook {
    fn name(&self) -> &str {
        AUTO_CHECKPOINT_HOOK
    }

    fn description(&self) -> &str {
        "Save a checkpoint after each processed input"
    }

    async fn after_input_complete(
        &self,
        input: &str,
        agent: &dyn CheckpointAgent,
    ) -> CheckpointResult<()> {
        let name = auto_checkpoint_name(input, self.service.config().max_auto_name_chars);
        let id = self.service.save_agent_checkpoint(name, agent).await?;
        tracing::debug!("Auto-checkpoint {} saved", id.short());
        Ok(())
    }
}

/// Checkpoint name for an input: whitespace collapsed, cut to `max_chars`
pub fn auto_checkpoint_name(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return EMPTY_INPUT_NAME.to_string();
    }
    collapsed.chars().take(max_chars).collect()
}
