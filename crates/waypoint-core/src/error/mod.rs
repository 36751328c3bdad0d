//! Error types for Waypoint
//!
//! Every fallible operation in this crate returns [`CheckpointResult`]. The
//! variants are kept distinguishable so callers (chat commands, UIs) can react
//! to a missing checkpoint differently from a storage failure:
//! - `NoActiveProvider` / `ProviderNotFound`: provider selection problems
//! - `CheckpointNotFound`: a restore referenced an unknown id
//! - `Storage` / `Io` / `Json`: provider failures, passed through untouched

mod classifiers;
mod constructors;
mod conversions;
mod types;

pub use types::{CheckpointError, CheckpointResult};
