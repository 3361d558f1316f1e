//! Core registry mapping names to type handles.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::RegistryError;

/// Trait for items that can be stored in a registry.
///
/// Each item must be able to derive its own name, used whenever the caller
/// registers it without an explicit name/alias.
pub trait RegistryItem: Send + Sync {
    /// Returns the intrinsic name for this item.
    fn registry_name(&self) -> &str;
}

/// Generic registry for managing type handles by name.
///
/// Stores `Arc<T>` handles keyed by name so callers can look a type up and
/// instantiate it themselves later; the registry never invokes a handle.
/// Every name passes through the registry's case-sensitivity policy, fixed
/// at construction: a case-insensitive registry upper-cases names before
/// using them as keys, so the original input casing is not retained.
///
/// The registry performs no locking and mutates through `&mut self`. When a
/// registry must be shared across threads, wrap it in
/// [`SharedRegistry`](crate::sync::SharedRegistry) instead of synchronizing
/// individual calls by hand, since [`update`](Registry::update) and the bulk
/// operations are compound and must not be interleaved.
///
/// # Type Parameters
///
/// * `T` - The handle type to store, either a concrete type or a trait
///   object (e.g. `dyn Builder`)
pub struct Registry<T: ?Sized + RegistryItem> {
    items: HashMap<String, Arc<T>>,
    case_sensitive: bool,
}

impl<T: ?Sized + RegistryItem> Registry<T> {
    /// Create a new empty, case-sensitive registry.
    pub fn new() -> Self {
        Self::with_case_sensitivity(true)
    }

    /// Create a new empty registry with an explicit case-sensitivity policy.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            items: HashMap::new(),
            case_sensitive,
        }
    }

    /// Create a registry pre-populated from a name-to-handle mapping.
    ///
    /// Validation follows [`bulk_register_named`](Registry::bulk_register_named);
    /// any failure aborts construction, so no partially populated registry
    /// is ever returned.
    pub fn from_named(
        items: HashMap<String, Arc<T>>,
        case_sensitive: bool,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::with_case_sensitivity(case_sensitive);
        registry.bulk_register_named(items)?;
        Ok(registry)
    }

    /// Create a registry pre-populated from a sequence of handles.
    ///
    /// Names are derived from each handle's [`registry_name`]. Validation
    /// follows [`bulk_register`](Registry::bulk_register); any failure aborts
    /// construction.
    ///
    /// [`registry_name`]: RegistryItem::registry_name
    pub fn from_handles(
        handles: Vec<Arc<T>>,
        case_sensitive: bool,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::with_case_sensitivity(case_sensitive);
        registry.bulk_register(handles)?;
        Ok(registry)
    }

    /// Whether lookups and registrations compare names exactly.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Register a handle under its derived name.
    ///
    /// Returns an error if the name is already registered.
    pub fn register(&mut self, handle: Arc<T>) -> Result<(), RegistryError> {
        let key = self.pre_register(&handle, None)?;
        self.insert(key, handle);
        Ok(())
    }

    /// Register a handle under an explicit name/alias.
    ///
    /// Returns an error if the name is already registered.
    pub fn register_as(&mut self, handle: Arc<T>, name: &str) -> Result<(), RegistryError> {
        let key = self.pre_register(&handle, Some(name))?;
        self.insert(key, handle);
        Ok(())
    }

    /// Register a batch of named handles, all-or-nothing.
    ///
    /// In case-insensitive mode the batch is rejected up front when two
    /// distinct keys fold to the same form. Every item is then validated
    /// against the current registry state before anything is inserted; a
    /// single failure leaves the registry untouched.
    pub fn bulk_register_named(
        &mut self,
        items: HashMap<String, Arc<T>>,
    ) -> Result<(), RegistryError> {
        if !self.case_sensitive {
            let folded: HashSet<String> = items.keys().map(|k| self.normalize(k)).collect();
            if folded.len() < items.len() {
                return Err(RegistryError::CaseFoldCollision);
            }
        }

        let mut validated = Vec::with_capacity(items.len());
        for (name, handle) in items {
            let key = self.pre_register(&handle, Some(&name))?;
            validated.push((key, handle));
        }
        for (key, handle) in validated {
            self.insert(key, handle);
        }
        Ok(())
    }

    /// Register a batch of handles under their derived names, all-or-nothing.
    ///
    /// The batch is rejected up front when it lists the same handle more
    /// than once (identity comparison), since both occurrences would derive
    /// the same name. Every item is then validated against the current
    /// registry state before anything is inserted.
    pub fn bulk_register(&mut self, handles: Vec<Arc<T>>) -> Result<(), RegistryError> {
        for (i, handle) in handles.iter().enumerate() {
            if handles[i + 1..].iter().any(|other| Arc::ptr_eq(handle, other)) {
                return Err(RegistryError::DuplicateHandles);
            }
        }

        let mut validated = Vec::with_capacity(handles.len());
        for handle in handles {
            let key = self.pre_register(&handle, None)?;
            validated.push((key, handle));
        }
        for (key, handle) in validated {
            self.insert(key, handle);
        }
        Ok(())
    }

    /// Get a handle by name.
    ///
    /// Returns the stored handle uninvoked; instantiation is up to the
    /// caller.
    pub fn get(&self, name: &str) -> Result<Arc<T>, RegistryError> {
        let key = self.normalize(name);
        self.items
            .get(&key)
            .map(Arc::clone)
            .ok_or(RegistryError::NotFound(key))
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(&self.normalize(name))
    }

    /// Like [`contains`](Registry::contains), but failing with the same
    /// error as [`get`](Registry::get) when the name is absent.
    pub fn ensure_registered(&self, name: &str) -> Result<(), RegistryError> {
        let key = self.normalize(name);
        if !self.items.contains_key(&key) {
            return Err(RegistryError::NotFound(key));
        }
        Ok(())
    }

    /// Unregister a handle by name.
    ///
    /// Returns an error if the name is not registered.
    pub fn unregister(&mut self, name: &str) -> Result<(), RegistryError> {
        let key = self.normalize(name);
        if self.items.remove(&key).is_none() {
            return Err(RegistryError::NotFound(key));
        }
        debug!("item unregistered: {}", key);
        Ok(())
    }

    /// Replace the handle registered under `name`, keeping the name.
    ///
    /// Performed as an unregister followed by a register, not as one atomic
    /// step: between the two the name is briefly absent, which only matters
    /// when the registry is shared without synchronization.
    pub fn update(&mut self, name: &str, new_handle: Arc<T>) -> Result<(), RegistryError> {
        self.unregister(name)?;
        self.register_as(new_handle, name)
    }

    /// Remove all registered handles.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("registry cleared");
    }

    /// Get the number of registered handles.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// List all registered (normalized) names.
    pub fn names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    /// Iterate over all entries as (name, handle) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<T>)> {
        self.items.iter().map(|(name, handle)| (name.as_str(), handle))
    }

    fn normalize(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_uppercase()
        }
    }

    /// Validate one registration and return the key to insert under.
    fn pre_register(&self, handle: &Arc<T>, name: Option<&str>) -> Result<String, RegistryError> {
        let key = self.normalize(name.unwrap_or_else(|| handle.registry_name()));
        if self.items.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered {
                item: handle.registry_name().to_string(),
                existing: key,
            });
        }
        Ok(key)
    }

    fn insert(&mut self, key: String, handle: Arc<T>) {
        debug!("item registered: {}", key);
        self.items.insert(key, handle);
    }
}

impl<T: ?Sized + RegistryItem> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
