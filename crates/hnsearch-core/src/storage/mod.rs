pub mod file_store;

use std::collections::HashMap;

use crate::error::StorageError;

pub use file_store::FileStore;

/// String key-value persistence, the desktop stand-in for browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// The store used by the binaries: [`FileStore`] under the platform data
/// directory, or a [`MemoryStore`] when there is none.
pub fn open_default() -> Box<dyn KeyValueStore + Send> {
    match FileStore::default_path() {
        Some(path) => {
            tracing::info!("Persisting search term in {:?}", path);
            Box::new(FileStore::open(path))
        }
        None => {
            tracing::warn!("No data directory found, search term will not be persisted");
            Box::new(MemoryStore::new())
        }
    }
}

/// A single string value that is read once at construction and written on
/// every change. Writes are best-effort: failures are logged and dropped.
#[derive(Debug)]
pub struct PersistentPreference<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistentPreference<S> {
    /// An absent or empty stored value resolves to `default`. The resolved
    /// value is written back right away.
    pub fn new(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = store
            .get(&key)
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| default.into());

        let mut cell = Self { store, key, value };
        cell.persist();
        cell
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.persist();
    }

    /// Give the store back, e.g. to reopen the same key.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(&self.key, &self.value) {
            tracing::warn!("Failed to persist '{}': {}", self.key, e);
        }
    }
}
