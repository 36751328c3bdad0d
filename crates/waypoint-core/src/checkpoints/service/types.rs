//! Checkpoint service types and provider selection

use parking_lot::RwLock;
use std::sync::Arc;

use crate::checkpoints::provider::CheckpointProvider;
use crate::config::CheckpointConfig;
use crate::error::CheckpointResult;
use crate::registry::KeyedRegistry;

/// Orchestrates checkpoints over whichever provider is active
///
/// The service holds no checkpoint data itself, only the provider registry
/// and its configuration. Registry access is synchronous; the lock is never
/// held while a provider call is awaited.
pub struct CheckpointService {
    pub(super) config: CheckpointConfig,
    pub(super) providers: RwLock<KeyedRegistry<dyn CheckpointProvider>>,
}

impl CheckpointService {
    /// Create a service with an empty provider registry
    pub fn new() -> Self {
        Self::with_config(CheckpointConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: CheckpointConfig) -> Self {
        Self {
            config,
            providers: RwLock::new(KeyedRegistry::new("checkpoint provider")),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &CheckpointConfig {
        &self.config
    }

    /// Register a provider under `name`, replacing any previous one
    ///
    /// Registration never changes which provider is active.
    pub fn register_provider(
        &self,
        name: impl Into<String>,
        provider: Arc<dyn CheckpointProvider>,
    ) {
        self.providers.write().register(name, provider);
    }

    /// Make `name` the only active provider
    pub fn set_active_provider_name(&self, name: &str) -> CheckpointResult<()> {
        self.providers.write().set_active(name)?;
        tracing::info!("Active checkpoint provider set to '{}'", name);
        Ok(())
    }

    /// Activate the provider named in the configuration, if any
    ///
    /// Returns the activated name. Call this after the providers have been
    /// registered.
    pub fn activate_default_provider(&self) -> CheckpointResult<Option<String>> {
        match &self.config.default_provider {
            Some(name) => {
                self.set_active_provider_name(name)?;
                Ok(Some(name.clone()))
            }
            None => Ok(None),
        }
    }

    /// Get the active provider
    pub fn active_provider(&self) -> CheckpointResult<Arc<dyn CheckpointProvider>> {
        Ok(self.providers.read().active()?)
    }

    /// Name of the active provider, if one is selected
    pub fn active_provider_name(&self) -> Option<String> {
        self.providers.read().active_name().map(str::to_string)
    }

    /// Names of all registered providers
    pub fn available_providers(&self) -> Vec<String> {
        self.providers.read().available()
    }
}

impl Default for CheckpointService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CheckpointService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointService")
            .field("config", &self.config)
            .field("providers", &*self.providers.read())
            .finish()
    }
}
