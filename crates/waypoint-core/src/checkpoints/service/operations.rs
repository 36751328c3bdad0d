//! Save, restore and list operations

use crate::checkpoints::agent::CheckpointAgent;
use crate::checkpoints::listing;
use crate::checkpoints::types::{CheckpointId, CheckpointListItem, NamedCheckpoint};
use crate::error::{CheckpointError, CheckpointResult};

use super::types::CheckpointService;

impl CheckpointService {
    /// Capture the agent's state and store it under `name`
    ///
    /// Returns the id issued by the active provider. Storage failures are
    /// returned as-is; nothing is retried.
    pub async fn save_agent_checkpoint(
        &self,
        name: impl Into<String>,
        agent: &dyn CheckpointAgent,
    ) -> CheckpointResult<CheckpointId> {
        let provider = self.active_provider()?;
        let checkpoint = NamedCheckpoint::new(name, agent.generate_checkpoint());
        let name = checkpoint.name.clone();
        let agent_id = checkpoint.state.agent_id.clone();

        let id = provider.store_checkpoint(checkpoint).await?;

        tracing::info!(
            "Saved checkpoint {} '{}' for agent {}",
            id.short(),
            name,
            agent_id
        );
        Ok(id)
    }

    /// Replace the agent's state with the checkpoint stored under `id`
    ///
    /// Fails with [`CheckpointError::CheckpointNotFound`] without touching the
    /// agent when the provider has no such record. If the agent's own replace
    /// step fails, its error is returned and the agent's state is only as
    /// consistent as its `restore_checkpoint` implementation guarantees.
    pub async fn restore_agent_checkpoint(
        &self,
        id: &CheckpointId,
        agent: &mut dyn CheckpointAgent,
    ) -> CheckpointResult<()> {
        let provider = self.active_provider()?;

        let Some(checkpoint) = provider.retrieve_checkpoint(id).await? else {
            tracing::warn!("Checkpoint {} not found", id);
            return Err(CheckpointError::checkpoint_not_found(id.as_str()));
        };

        agent.restore_checkpoint(&checkpoint)?;

        tracing::info!(
            "Restored checkpoint {} '{}' ({} messages)",
            id.short(),
            checkpoint.name(),
            checkpoint.state().messages.len()
        );
        Ok(())
    }

    /// List checkpoints from the active provider, in provider order
    pub async fn list_checkpoints(&self) -> CheckpointResult<Vec<CheckpointListItem>> {
        let provider = self.active_provider()?;
        provider.list_checkpoints().await
    }

    /// Find a checkpoint by id prefix
    ///
    /// Returns the first match in provider order.
    pub async fn find_by_short_id(
        &self,
        short_id: &str,
    ) -> CheckpointResult<Option<CheckpointListItem>> {
        if short_id.is_empty() {
            return Ok(None);
        }

        let items = self.list_checkpoints().await?;
        Ok(items
            .into_iter()
            .find(|item| item.id.as_str().starts_with(short_id)))
    }

    /// Most recent checkpoint, optionally restricted to one agent
    pub async fn latest_checkpoint(
        &self,
        agent_id: Option<&str>,
    ) -> CheckpointResult<Option<CheckpointListItem>> {
        let items = self.list_checkpoints().await?;
        let candidates = items
            .into_iter()
            .filter(|item| agent_id.is_none_or(|agent| item.agent_id == agent))
            .collect();
        Ok(listing::newest(candidates))
    }
}
