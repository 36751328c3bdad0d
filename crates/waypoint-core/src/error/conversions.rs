//! From trait implementations for CheckpointError conversions

use super::types::CheckpointError;
use crate::registry::RegistryError;

impl From<std::io::Error> for CheckpointError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for CheckpointError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<RegistryError> for CheckpointError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound { name, .. } => Self::ProviderNotFound { name },
            RegistryError::NoActive { .. } => Self::NoActiveProvider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_mapping() {
        let err: CheckpointError = RegistryError::NotFound {
            kind: "checkpoint provider",
            name: "redis".to_string(),
        }
        .into();
        assert_eq!(err, CheckpointError::provider_not_found("redis"));

        let err: CheckpointError = RegistryError::NoActive {
            kind: "checkpoint provider",
        }
        .into();
        assert_eq!(err, CheckpointError::NoActiveProvider);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CheckpointError = io.into();
        assert!(matches!(err, CheckpointError::Io { ref message, .. } if message == "denied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CheckpointError = parse.into();
        assert_eq!(err.error_code(), "JSON_ERROR");
    }
}
