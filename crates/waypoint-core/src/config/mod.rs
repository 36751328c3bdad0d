//! Checkpoint configuration

mod file_loader;

pub use file_loader::load_from_file;

use serde::{Deserialize, Serialize};

use crate::error::{CheckpointError, CheckpointResult};

/// Default maximum length of an auto-checkpoint name, in characters
pub const DEFAULT_MAX_AUTO_NAME_CHARS: usize = 120;

/// Configuration for the checkpoint service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Provider to activate via `CheckpointService::activate_default_provider`
    pub default_provider: Option<String>,
    /// Enable the auto-checkpoint hook when the service is attached
    pub auto_checkpoint: bool,
    /// Maximum length of names given to auto-checkpoints
    pub max_auto_name_chars: usize,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            default_provider: None,
            auto_checkpoint: true,
            max_auto_name_chars: DEFAULT_MAX_AUTO_NAME_CHARS,
        }
    }
}

impl CheckpointConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider activated by default
    pub fn with_default_provider(mut self, name: impl Into<String>) -> Self {
        self.default_provider = Some(name.into());
        self
    }

    /// Attach the auto-checkpoint hook disabled
    pub fn without_auto_checkpoint(mut self) -> Self {
        self.auto_checkpoint = false;
        self
    }

    /// Set the auto-checkpoint name limit
    pub fn with_max_auto_name_chars(mut self, max: usize) -> Self {
        self.max_auto_name_chars = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CheckpointResult<()> {
        if self.max_auto_name_chars == 0 {
            return Err(CheckpointError::config(
                "max_auto_name_chars must be greater than 0",
            ));
        }

        if let Some(name) = &self.default_provider {
            if name.trim().is_empty() {
                return Err(CheckpointError::config("default_provider must not be empty"));
            }
        }

        Ok(())
    }
}
