use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::StorageError;

/// JSON object on disk, rewritten in full on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing, unreadable or corrupt file reads as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable store {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// `<data dir>/hnsearch/storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("hnsearch").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::storage::PersistentPreference;

    fn temp_root(name: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!("hnsearch_store_{name}_{suffix}"))
    }

    #[test]
    fn values_survive_reopen() {
        let root = temp_root("reopen");
        let path = root.join("nested").join("storage.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("search"), None);
        store.set("search", "Rust").expect("set");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("search").as_deref(), Some("Rust"));

        std::fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_overwritten() {
        let root = temp_root("corrupt");
        std::fs::create_dir_all(&root).expect("temp root");
        let path = root.join("storage.json");
        std::fs::write(&path, "not json").expect("write");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("search"), None);
        store.set("search", "Go").expect("set");
        assert_eq!(FileStore::open(&path).get("search").as_deref(), Some("Go"));

        std::fs::remove_dir_all(root).expect("cleanup");
    }

    #[test]
    fn preference_round_trips_through_disk() {
        let root = temp_root("preference");
        let path = root.join("storage.json");

        let mut cell = PersistentPreference::new(FileStore::open(&path), "search", "React");
        assert_eq!(cell.value(), "React");
        cell.set("Rust");

        let fresh = PersistentPreference::new(FileStore::open(&path), "search", "React");
        assert_eq!(fresh.value(), "Rust");

        std::fs::remove_dir_all(root).expect("cleanup");
    }
}
