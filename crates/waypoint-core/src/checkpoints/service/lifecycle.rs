//! Attaching the service to a host

use std::sync::Arc;

use crate::error::CheckpointResult;
use crate::hooks::{AUTO_CHECKPOINT_HOOK, AutoCheckpointHook, HookManager};

use super::types::CheckpointService;

impl CheckpointService {
    /// Register the auto-checkpoint hook with the host's hook manager
    ///
    /// The hook is enabled when `auto_checkpoint` is set in the configuration
    /// (the default) and explicitly disabled otherwise. The host can toggle it
    /// later through the same [`HookManager`].
    pub fn attach(self: &Arc<Self>, hooks: &dyn HookManager) -> CheckpointResult<()> {
        hooks.register_hook(Arc::new(AutoCheckpointHook::new(Arc::clone(self))))?;

        if self.config.auto_checkpoint {
            hooks.enable_hook(AUTO_CHECKPOINT_HOOK)?;
        } else {
            hooks.disable_hook(AUTO_CHECKPOINT_HOOK)?;
        }

        tracing::debug!(
            "Checkpoint service attached (auto-checkpoint {})",
            if self.config.auto_checkpoint {
                "enabled"
            } else {
                "disabled"
            }
        );
        Ok(())
    }
}
