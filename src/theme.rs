//! Theme state and per-mode styling.
//!
//! The store owns the active [`ThemeMode`] and writes every change through to
//! the injected preference storage, so the choice survives restarts. Storage
//! trouble degrades to in-memory-only state.

use crate::storage::PreferenceStorage;
use crate::types::ThemeMode;
use std::sync::Arc;

pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Arc<dyn PreferenceStorage>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
    }
}

impl ThemeStore {
    /// Reads the persisted preference so the stored mode applies before first
    /// render; a missing or unreadable value falls back to dark.
    pub fn load(storage: Arc<dyn PreferenceStorage>) -> Self {
        let mode = storage
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.flipped());
        self.mode
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.mode) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to encode theme preference: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, &raw) {
            tracing::warn!("theme preference not persisted: {err}");
        }
    }
}

pub struct ThemeDefinition {
    pub css: &'static str,
    /// Marker class on the styling root; exactly one of "light"/"dark".
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "dark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "light",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-background: #05060f;
    --color-surface: rgba(255, 255, 255, 0.04);
    --color-surface-border: rgba(255, 255, 255, 0.1);
    --color-foreground: #f5f7ff;
    --color-foreground-muted: rgba(245, 247, 255, 0.7);
    --color-primary: #3b82f6;
    --color-primary-soft: rgba(59, 130, 246, 0.2);
    --color-accent: #8b5cf6;
    --color-chat-user-bg: #3b82f6;
    --color-chat-user-text: #ffffff;
    --color-input-bg: rgba(255, 255, 255, 0.05);
    --color-input-border: rgba(255, 255, 255, 0.12);
    --color-positive: #22c55e;
    --color-negative: #ef4444;
    --color-warning: #eab308;
    --color-grid-line: rgba(255, 255, 255, 0.1);
    --color-axis-label: rgba(255, 255, 255, 0.7);
}
body { background: var(--color-background); color: var(--color-foreground); }
.neon-text { text-shadow: 0 0 18px rgba(59, 130, 246, 0.55); }
.neon-glow { box-shadow: 0 0 16px rgba(59, 130, 246, 0.45); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-background: #f7f8fc;
    --color-surface: rgba(15, 23, 42, 0.04);
    --color-surface-border: rgba(15, 23, 42, 0.12);
    --color-foreground: #0f172a;
    --color-foreground-muted: rgba(15, 23, 42, 0.68);
    --color-primary: #2563eb;
    --color-primary-soft: rgba(37, 99, 235, 0.14);
    --color-accent: #7c3aed;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-input-bg: #ffffff;
    --color-input-border: rgba(15, 23, 42, 0.18);
    --color-positive: #16a34a;
    --color-negative: #dc2626;
    --color-warning: #ca8a04;
    --color-grid-line: rgba(15, 23, 42, 0.12);
    --color-axis-label: rgba(15, 23, 42, 0.6);
}
body { background: var(--color-background); color: var(--color-foreground); }
.neon-text { text-shadow: none; }
.neon-glow { box-shadow: 0 4px 14px rgba(37, 99, 235, 0.25); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn memory_store() -> ThemeStore {
        ThemeStore::load(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(memory_store().mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut store = memory_store();
        let before = store.mode();
        store.toggle();
        store.toggle();
        assert_eq!(store.mode(), before);
    }

    #[test]
    fn set_persists_across_reload() {
        let storage: Arc<MemoryStorage> = Arc::new(MemoryStorage::new());
        let mut store = ThemeStore::load(storage.clone());
        store.set(ThemeMode::Light);

        let reloaded = ThemeStore::load(storage);
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(THEME_STORAGE_KEY, "not json").unwrap();
        assert_eq!(ThemeStore::load(storage).mode(), ThemeMode::Dark);
    }

    #[test]
    fn root_classes_are_mutually_exclusive() {
        assert_eq!(theme_definition(ThemeMode::Dark).root_class, "dark");
        assert_eq!(theme_definition(ThemeMode::Light).root_class, "light");
    }
}
