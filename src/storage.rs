//! Durable key-value storage for UI preferences.
//!
//! One JSON file per key on native platforms, an in-memory map on wasm. The
//! trait exists so the theme store can be handed a fake in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create storage directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to write preference: {0}")]
    Write(#[source] std::io::Error),
    #[error("storage backend is poisoned")]
    Poisoned,
}

pub trait PreferenceStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage under the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStorage {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new() -> Self {
        let dir = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("neofolio").join("preferences"),
            None => PathBuf::from("cache").join("preferences"),
        };
        Self { dir }
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(StorageError::CreateDir)?;
        fs::write(self.key_path(key), value).map_err(StorageError::Write)
    }
}

/// Volatile storage; the wasm backend and the test fake.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The storage backend the running app uses.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Arc<dyn PreferenceStorage> {
    Arc::new(FileStorage::new())
}

#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Arc<dyn PreferenceStorage> {
    Arc::new(MemoryStorage::new())
}

/// Sanitize storage key for filesystem use.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("theme-storage"), "theme-storage");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing"), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k"), Some("v".to_string()));
    }
}
