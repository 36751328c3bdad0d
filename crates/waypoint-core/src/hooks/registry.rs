//! In-memory hook registry

use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::types::{AgentHook, HookManager};
use crate::checkpoints::CheckpointAgent;
use crate::error::{CheckpointError, CheckpointResult};

#[derive(Default)]
struct HookTable {
    hooks: BTreeMap<String, Arc<dyn AgentHook>>,
    enabled: BTreeSet<String>,
}

/// Registry for hooks with per-hook enablement
///
/// Cloning shares the underlying table.
#[derive(Clone, Default)]
pub struct HookRegistry {
    table: Arc<RwLock<HookTable>>,
}

impl HookRegistry {
    /// Create a new empty hook registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all registered hooks, sorted
    pub fn names(&self) -> Vec<String> {
        self.table.read().hooks.keys().cloned().collect()
    }

    /// Names of the enabled hooks
    pub fn enabled_hooks(&self) -> BTreeSet<String> {
        self.table.read().enabled.clone()
    }

    /// Enable exactly the given hooks and disable every other one
    ///
    /// Fails without changing anything if a name is not registered.
    pub fn replace_enabled(&self, names: &BTreeSet<String>) -> CheckpointResult<()> {
        let mut table = self.table.write();
        if let Some(unknown) = names.iter().find(|name| !table.hooks.contains_key(*name)) {
            return Err(CheckpointError::hook(unknown.as_str(), "not registered"));
        }
        table.enabled = names.clone();
        Ok(())
    }

    /// Get the number of registered hooks
    pub fn count(&self) -> usize {
        self.table.read().hooks.len()
    }

    /// Run every enabled hook, in name order
    ///
    /// A failing hook does not stop the others. Failures are logged and the
    /// first one is returned once all hooks have run.
    pub async fn after_input_complete(
        &self,
        input: &str,
        agent: &dyn CheckpointAgent,
    ) -> CheckpointResult<()> {
        let hooks: Vec<Arc<dyn AgentHook>> = {
            let table = self.table.read();
            table
                .enabled
                .iter()
                .filter_map(|name| table.hooks.get(name).cloned())
                .collect()
        };

        let mut first_error = None;
        for hook in hooks {
            if let Err(e) = hook.after_input_complete(input, agent).await {
                tracing::warn!("Hook '{}' failed: {}", hook.name(), e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn set_enabled(&self, name: &str, enabled: bool) -> CheckpointResult<()> {
        let mut table = self.table.write();
        if !table.hooks.contains_key(name) {
            return Err(CheckpointError::hook(name, "not registered"));
        }
        if enabled {
            table.enabled.insert(name.to_string());
        } else {
            table.enabled.remove(name);
        }
        tracing::debug!(
            "Hook '{}' {}",
            name,
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }
}

impl HookManager for HookRegistry {
    fn register_hook(&self, hook: Arc<dyn AgentHook>) -> CheckpointResult<()> {
        let name = hook.name().to_string();
        if name.is_empty() {
            return Err(CheckpointError::hook(name, "hook name must not be empty"));
        }
        self.table.write().hooks.insert(name.clone(), hook);
        tracing::debug!("Registered hook '{}'", name);
        Ok(())
    }

    fn enable_hook(&self, name: &str) -> CheckpointResult<()> {
        self.set_enabled(name, true)
    }

    fn disable_hook(&self, name: &str) -> CheckpointResult<()> {
        self.set_enabled(name, false)
    }

    fn is_enabled(&self, name: &str) -> bool {
        let table = self.table.read();
        table.hooks.contains_key(name) && table.enabled.contains(name)
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.table.read();
        f.debug_struct("HookRegistry")
            .field("hooks", &table.hooks.keys().collect::<Vec<_>>())
            .field("enabled", &table.enabled)
            .finish()
    }
}
