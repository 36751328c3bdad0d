//! Error classification helpers

use super::types::CheckpointError;

impl CheckpointError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveProvider => "NO_ACTIVE_PROVIDER",
            Self::ProviderNotFound { .. } => "PROVIDER_NOT_FOUND",
            Self::CheckpointNotFound { .. } => "CHECKPOINT_NOT_FOUND",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Json { .. } => "JSON_ERROR",
            Self::Agent { .. } => "AGENT_ERROR",
            Self::Hook { .. } => "HOOK_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Whether the error reports a missing provider or checkpoint
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProviderNotFound { .. } | Self::CheckpointNotFound { .. }
        )
    }

    /// Whether the error concerns provider selection rather than storage
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::NoActiveProvider | Self::ProviderNotFound { .. })
    }

    /// Whether the error originated in a storage backend
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            Self::Storage { .. } | Self::Io { .. } | Self::Json { .. }
        )
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Storage { context, .. } | Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}
