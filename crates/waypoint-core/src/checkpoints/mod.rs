//! Agent state checkpoints
//!
//! A checkpoint is a named, timestamped, immutable snapshot of an agent's
//! enabled tools, enabled hooks, custom state, message history and last
//! response id. [`CheckpointService`] saves, restores and lists checkpoints
//! through whichever [`CheckpointProvider`] is active.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use waypoint_core::checkpoints::{CheckpointService, MemoryCheckpointProvider};
//!
//! let service = CheckpointService::new();
//! service.register_provider("memory", Arc::new(MemoryCheckpointProvider::new()));
//! service.set_active_provider_name("memory")?;
//!
//! let id = service.save_agent_checkpoint("before refactoring", &agent).await?;
//!
//! // ... agent state changes ...
//!
//! service.restore_agent_checkpoint(&id, &mut agent).await?;
//! ```
//!
//! # Lifecycle
//!
//! Each record goes `nonexistent → stored → retrieved*`. There is no update
//! and no delete.

mod agent;
pub mod listing;
mod provider;
mod providers;
mod service;
mod types;

pub use agent::CheckpointAgent;
pub use provider::CheckpointProvider;
pub use providers::MemoryCheckpointProvider;
pub use service::CheckpointService;
pub use types::{
    ChatMessage, CheckpointId, CheckpointListItem, CheckpointState, MessageRole, NamedCheckpoint,
    StoredCheckpoint,
};
