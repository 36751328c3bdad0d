//! Keyed registry with a single active selection
//!
//! [`KeyedRegistry`] maps names to shared implementations and tracks at most
//! one "active" name. It knows nothing about checkpoints: the checkpoint
//! service instantiates it over `dyn CheckpointProvider`, but any trait object
//! or concrete type works.
//!
//! ```rust
//! use std::sync::Arc;
//! use waypoint_core::registry::KeyedRegistry;
//!
//! let mut registry: KeyedRegistry<str> = KeyedRegistry::new("greeting");
//! registry.register("en", Arc::from("hello"));
//! registry.register("fr", Arc::from("bonjour"));
//!
//! registry.set_active("fr").unwrap();
//! assert_eq!(&*registry.active().unwrap(), "bonjour");
//! assert!(registry.set_active("de").is_err());
//! ```


use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised by [`KeyedRegistry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name was never registered
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// Nothing has been selected yet
    #[error("No active {kind}")]
    NoActive { kind: &'static str },
}

/// Name-to-implementation map with one optional active entry
///
/// Registration is insert-or-overwrite and never changes the selection.
/// There is no removal: entries live as long as the registry.
pub struct KeyedRegistry<T: ?Sized> {
    kind: &'static str,
    items: HashMap<String, Arc<T>>,
    active: Option<String>,
}

impl<T: ?Sized> KeyedRegistry<T> {
    /// Create an empty registry; `kind` labels the entries in error messages
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: HashMap::new(),
            active: None,
        }
    }

    /// Label used in error messages
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Register an item, replacing any previous entry with the same name
    pub fn register(&mut self, name: impl Into<String>, item: Arc<T>) {
        let name = name.into();
        if self.items.insert(name.clone(), item).is_some() {
            tracing::debug!("Replaced {} '{}'", self.kind, name);
        } else {
            tracing::debug!("Registered {} '{}'", self.kind, name);
        }
    }

    /// Make `name` the only active entry
    pub fn set_active(&mut self, name: &str) -> Result<(), RegistryError> {
        if !self.items.contains_key(name) {
            return Err(RegistryError::NotFound {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Get the active item
    pub fn active(&self) -> Result<Arc<T>, RegistryError> {
        self.active
            .as_deref()
            .and_then(|name| self.items.get(name))
            .cloned()
            .ok_or(RegistryError::NoActive { kind: self.kind })
    }

    /// Name of the active item, if one is selected
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Get an item by name
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.items.get(name).cloned()
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// All registered names, sorted
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.items.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for KeyedRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedRegistry")
            .field("kind", &self.kind)
            .field("items", &self.available())
            .field("active", &self.active)
            .finish()
    }
}
