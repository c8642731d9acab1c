use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::settings::Settings;
use crate::domain::ports::SettingsStore;
use crate::utils::error::Result;

/// Settings persisted as one JSON document on disk. Last write wins; a
/// missing file means no stored settings.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: Mutex<Option<Settings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            stored: Mutex::new(Some(settings)),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        let stored = self.stored.lock().unwrap_or_else(|e| e.into_inner());
        Ok(stored.clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut stored = self.stored.lock().unwrap_or_else(|e| e.into_inner());
        *stored = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));

        let mut settings = Settings::default();
        settings.group_size = 5;
        settings.group_prefix = "Squad".to_string();
        store.save(&settings).unwrap();

        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn test_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));

        let mut first = Settings::default();
        first.group_size = 3;
        store.save(&first).unwrap();

        let mut second = Settings::default();
        second.group_size = 7;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap().group_size, 7);
    }

    #[test]
    fn test_partial_stored_record_falls_back_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"suspense": true}"#).unwrap();

        let store = JsonFileStore::new(&path);
        let settings = store.load().unwrap().unwrap();
        assert!(settings.suspense);
        assert_eq!(settings.group_size, 2);
    }
}
