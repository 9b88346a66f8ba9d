//! Key-value persistence boundary.
//!
//! The store is the source of truth for all application data: string keys
//! mapped to string values, surviving process restarts. Collections are
//! serialized as JSON documents and rewritten in full on every mutation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::AppError;

/// Store keys as constants to avoid stringly-typed lookups.
pub mod keys {
    /// Sentinel marking a store that has already been seeded.
    pub const INITIALIZED: &str = "initialized";
    pub const USERS: &str = "users";
    pub const PATIENTS: &str = "patients";
    pub const INCIDENTS: &str = "incidents";
    /// Persisted login session.
    pub const SESSION: &str = "loggedInUser";
}

/// Synchronous string key-value store contract.
///
/// Implementations must complete each call before returning; a failed write
/// is not retried and propagates to the caller.
pub trait StoreAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// File-backed store: a single JSON object file mapping keys to values.
///
/// Every `set` and `remove` rewrites the whole file synchronously, so the
/// on-disk state always matches the last completed mutation.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store file, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(path)?;
            if raw.is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }
}

impl StoreAdapter for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.lock()?;
        entries.remove(key);
        self.flush(&entries)
    }
}

/// In-memory store for tests and embedders that do not need persistence.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }
}

impl StoreAdapter for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap().as_deref(), Some("[]"));

        store.remove("users").unwrap();
        assert!(store.get("users").unwrap().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set(keys::INITIALIZED, "true").unwrap();
            store.set(keys::PATIENTS, r#"[{"id":"p1"}]"#).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::INITIALIZED).unwrap().as_deref(), Some("true"));
        assert_eq!(
            store.get(keys::PATIENTS).unwrap().as_deref(),
            Some(r#"[{"id":"p1"}]"#)
        );
    }

    #[test]
    fn test_file_store_remove_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set(keys::SESSION, "{}").unwrap();
        store.remove(keys::SESSION).unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert!(store.get(keys::SESSION).unwrap().is_none());
    }
}
