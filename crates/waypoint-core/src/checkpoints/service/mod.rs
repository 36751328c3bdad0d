//! Checkpoint service
//!
//! This module provides the save/restore/list API, delegating storage to the
//! active provider and state capture/replacement to the host agent.

mod lifecycle;
mod operations;
mod types;

pub use types::CheckpointService;
