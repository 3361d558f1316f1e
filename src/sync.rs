//! Thread-safe wrapper around [`Registry`].

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::registry::{Registry, RegistryItem};

/// Synchronized registry for sharing across threads.
///
/// Wraps a [`Registry`] in a read-write lock and exposes the same operations
/// through `&self`. Compound operations ([`update`](SharedRegistry::update)
/// and the bulk forms) hold the write lock for their full duration, so other
/// threads never observe their intermediate states.
pub struct SharedRegistry<T: ?Sized + RegistryItem> {
    inner: RwLock<Registry<T>>,
}

impl<T: ?Sized + RegistryItem> SharedRegistry<T> {
    /// Create a new empty, case-sensitive registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry::new()),
        }
    }

    /// Create a new empty registry with an explicit case-sensitivity policy.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            inner: RwLock::new(Registry::with_case_sensitivity(case_sensitive)),
        }
    }

    /// Create a registry pre-populated from a name-to-handle mapping.
    pub fn from_named(
        items: HashMap<String, Arc<T>>,
        case_sensitive: bool,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            inner: RwLock::new(Registry::from_named(items, case_sensitive)?),
        })
    }

    /// Create a registry pre-populated from a sequence of handles.
    pub fn from_handles(
        handles: Vec<Arc<T>>,
        case_sensitive: bool,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            inner: RwLock::new(Registry::from_handles(handles, case_sensitive)?),
        })
    }

    /// Whether lookups and registrations compare names exactly.
    pub fn case_sensitive(&self) -> bool {
        self.inner.read().case_sensitive()
    }

    /// Register a handle under its derived name.
    pub fn register(&self, handle: Arc<T>) -> Result<(), RegistryError> {
        self.inner.write().register(handle)
    }

    /// Register a handle under an explicit name/alias.
    pub fn register_as(&self, handle: Arc<T>, name: &str) -> Result<(), RegistryError> {
        self.inner.write().register_as(handle, name)
    }

    /// Register a batch of named handles, all-or-nothing.
    pub fn bulk_register_named(
        &self,
        items: HashMap<String, Arc<T>>,
    ) -> Result<(), RegistryError> {
        self.inner.write().bulk_register_named(items)
    }

    /// Register a batch of handles under their derived names, all-or-nothing.
    pub fn bulk_register(&self, handles: Vec<Arc<T>>) -> Result<(), RegistryError> {
        self.inner.write().bulk_register(handles)
    }

    /// Get a handle by name.
    pub fn get(&self, name: &str) -> Result<Arc<T>, RegistryError> {
        self.inner.read().get(name)
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Like [`contains`](SharedRegistry::contains), but failing with the
    /// same error as [`get`](SharedRegistry::get) when the name is absent.
    pub fn ensure_registered(&self, name: &str) -> Result<(), RegistryError> {
        self.inner.read().ensure_registered(name)
    }

    /// Unregister a handle by name.
    pub fn unregister(&self, name: &str) -> Result<(), RegistryError> {
        self.inner.write().unregister(name)
    }

    /// Replace the handle registered under `name`, keeping the name.
    ///
    /// The write lock is held across the whole remove-and-reinsert, so the
    /// name never appears absent to other threads.
    pub fn update(&self, name: &str, new_handle: Arc<T>) -> Result<(), RegistryError> {
        self.inner.write().update(name, new_handle)
    }

    /// Remove all registered handles.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Get the number of registered handles.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// List all registered (normalized) names.
    pub fn names(&self) -> Vec<String> {
        self.inner.read().names()
    }
}

impl<T: ?Sized + RegistryItem> Default for SharedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
