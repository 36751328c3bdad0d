//! File-based configuration loading

use std::fs;
use std::path::Path;

use super::CheckpointConfig;
use crate::error::{CheckpointError, CheckpointResult};

/// Load configuration from a file
///
/// `.toml` files are parsed as TOML, anything else as JSON. Returns the
/// default config if the file doesn't exist. The loaded config is validated.
pub fn load_from_file(path: &Path) -> CheckpointResult<CheckpointConfig> {
    if !path.exists() {
        tracing::debug!("No checkpoint config at {}, using defaults", path.display());
        return Ok(CheckpointConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        CheckpointError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: CheckpointConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            CheckpointError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            CheckpointError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CheckpointConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("waypoint.toml");
        fs::write(
            &path,
            "default_provider = \"memory\"\nauto_checkpoint = false\nmax_auto_name_chars = 64\n",
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.default_provider.as_deref(), Some("memory"));
        assert!(!config.auto_checkpoint);
        assert_eq!(config.max_auto_name_chars, 64);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("waypoint.json");
        fs::write(&path, r#"{ "default_provider": "sqlite" }"#).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.default_provider.as_deref(), Some("sqlite"));
        assert!(config.auto_checkpoint);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "auto_checkpoint = ").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.context().unwrap().contains("broken.toml"));
    }

    #[test]
    fn test_loaded_config_is_validated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zero.toml");
        fs::write(&path, "max_auto_name_chars = 0\n").unwrap();

        assert!(load_from_file(&path).is_err());
    }
}
