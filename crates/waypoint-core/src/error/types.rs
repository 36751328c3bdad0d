//! Core error type for Waypoint

use thiserror::Error;

/// Result type alias for checkpoint operations
pub type CheckpointResult<T> = Result<T, CheckpointError>;

/// Main error type for checkpoint operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    /// No provider has been selected
    #[error("No active checkpoint provider")]
    NoActiveProvider,

    /// Attempt to activate a provider name that was never registered
    #[error("Checkpoint provider not found: {name}")]
    ProviderNotFound { name: String },

    /// The active provider has no record for the id
    #[error("Checkpoint not found: {id}")]
    CheckpointNotFound { id: String },

    /// Storage backend errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        context: Option<String>,
    },

    /// IO errors raised by a storage backend
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// The host agent failed to apply a checkpoint
    #[error("Agent error: {message}")]
    Agent { message: String },

    /// Hook management errors
    #[error("Hook error: {name}: {message}")]
    Hook { name: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },
}
