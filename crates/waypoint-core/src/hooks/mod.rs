//! Agent hooks
//!
//! The host agent owns hook management; the checkpoint service only needs the
//! narrow [`HookManager`] capability to register and toggle its
//! [`AutoCheckpointHook`]. [`HookRegistry`] is a ready-made in-memory
//! implementation hosts can embed.
//!
//! ```rust,ignore
//! let service = Arc::new(CheckpointService::new());
//! let hooks = HookRegistry::new();
//! service.attach(&hooks)?;
//!
//! // after each processed input:
//! hooks.after_input_complete("refactor the parser", &agent).await?;
//! ```

mod auto_checkpoint;
mod registry;
mod types;

pub use auto_checkpoint::{AUTO_CHECKPOINT_HOOK, AutoCheckpointHook, auto_checkpoint_name};
pub use registry::HookRegistry;
pub use types::{AgentHook, HookManager};
