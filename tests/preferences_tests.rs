//! Integration tests for preference storage, theme persistence, and the
//! canned response matcher.

use neofolio::assistant::ResponseTable;
use neofolio::storage::{FileStorage, MemoryStorage, PreferenceStorage, StorageError};
use neofolio::theme::{THEME_STORAGE_KEY, ThemeStore};
use neofolio::types::ThemeMode;
use std::sync::Arc;

mod storage_tests {
    use super::*;

    #[test]
    fn test_file_storage_set_and_get() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::at(dir.path());

        storage.set("theme-storage", "\"light\"").expect("set");
        assert_eq!(storage.get("theme-storage"), Some("\"light\"".to_string()));
    }

    #[test]
    fn test_file_storage_get_nonexistent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::at(dir.path());
        assert_eq!(storage.get("nonexistent_key"), None);
    }

    #[test]
    fn test_file_storage_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::at(dir.path());

        storage.set("k", "one").expect("set");
        storage.set("k", "two").expect("overwrite");
        assert_eq!(storage.get("k"), Some("two".to_string()));
    }

    #[test]
    fn test_file_storage_sanitizes_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::at(dir.path());

        storage.set("user:preferences:theme", "dark").expect("set");
        // The file lands inside the storage dir despite the odd key.
        assert_eq!(
            storage.get("user:preferences:theme"),
            Some("dark".to_string())
        );
        assert!(dir.path().join("user_preferences_theme.json").exists());
    }

    #[test]
    fn test_file_storage_creates_missing_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::at(dir.path().join("nested").join("prefs"));

        storage.set("k", "v").expect("set");
        assert_eq!(storage.get("k"), Some("v".to_string()));
    }
}

mod theme_tests {
    use super::*;

    /// Storage that always fails writes, for the degrade path.
    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn test_theme_survives_reload_via_file_storage() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut store = ThemeStore::load(Arc::new(FileStorage::at(dir.path())));
        assert_eq!(store.mode(), ThemeMode::Dark);
        store.set(ThemeMode::Light);

        // Fresh store over the same directory simulates a restart.
        let reloaded = ThemeStore::load(Arc::new(FileStorage::at(dir.path())));
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_round_trips_through_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ThemeStore::load(storage.clone());

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(
            storage.get(THEME_STORAGE_KEY),
            Some("\"light\"".to_string())
        );

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY), Some("\"dark\"".to_string()));
    }

    #[test]
    fn test_broken_storage_degrades_to_memory_only() {
        let mut store = ThemeStore::load(Arc::new(BrokenStorage));
        store.set(ThemeMode::Light);
        // The write failed but the in-memory state still moved.
        assert_eq!(store.mode(), ThemeMode::Light);
    }
}

mod matcher_tests {
    use super::*;

    #[test]
    fn test_keyword_hit_ignores_surrounding_text_and_case() {
        let table = ResponseTable::new(vec![("hi", "hello!")], "?");
        assert_eq!(table.respond("well HI there friend"), "hello!");
    }

    #[test]
    fn test_miss_returns_default() {
        let table = ResponseTable::new(vec![("hi", "hello!")], "?");
        assert_eq!(table.respond("bye"), "?");
        assert_eq!(table.respond(""), "?");
        assert_eq!(table.respond("   "), "?");
    }

    #[test]
    fn test_double_match_resolves_by_insertion_order() {
        let table = ResponseTable::new(
            vec![("projects", "projects answer"), ("contact", "contact answer")],
            "?",
        );
        assert_eq!(
            table.respond("how do I contact you about projects"),
            "projects answer"
        );

        let reversed = ResponseTable::new(
            vec![("contact", "contact answer"), ("projects", "projects answer")],
            "?",
        );
        assert_eq!(
            reversed.respond("how do I contact you about projects"),
            "contact answer"
        );
    }
}
