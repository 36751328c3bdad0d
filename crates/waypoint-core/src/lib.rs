//! Waypoint Core Library
//!
//! Named, restorable snapshots of a conversational agent's runtime state,
//! stored through a pluggable, single-active provider.

pub mod checkpoints;
pub mod config;
pub mod error;
pub mod hooks;
pub mod registry;

// Re-export commonly used types
pub use checkpoints::{
    ChatMessage, CheckpointAgent, CheckpointId, CheckpointListItem, CheckpointProvider,
    CheckpointService, CheckpointState, MemoryCheckpointProvider, MessageRole, NamedCheckpoint,
    StoredCheckpoint,
};
pub use config::CheckpointConfig;
pub use error::{CheckpointError, CheckpointResult};
pub use hooks::{AUTO_CHECKPOINT_HOOK, AgentHook, AutoCheckpointHook, HookManager, HookRegistry};
pub use registry::{KeyedRegistry, RegistryError};
