//! JSON-file-backed settings store
//!
//! Settings persist as a flat `key -> value` JSON object, by default in
//! `~/.config/claro/settings.json`. Loading absorbs all errors into an
//! empty map; a broken settings file must never prevent the surface
//! from coming up. Saving is atomic (write temp, then rename).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{SettingsStore, StoredValue};

/// Failure while persisting the settings file.
#[derive(Debug)]
pub enum StoreError {
    /// File read/write error.
    Io(String),
    /// JSON encode error.
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Serialize(msg) => write!(f, "serialize error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Get the default settings file path
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("claro").join("settings.json"))
}

/// Settings store persisted to a JSON file.
///
/// The whole map is held in memory; every write flushes the file. A
/// failed flush leaves the in-memory value in place and reports `false`
/// to the caller.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: RefCell<HashMap<String, StoredValue>>,
}

impl FileStore {
    /// Open the store at the default config path, if one can be
    /// determined on this platform.
    pub fn open_default() -> Option<Self> {
        default_settings_path().map(Self::open)
    }

    /// Open a store at an explicit path, loading whatever is there.
    ///
    /// A missing or malformed file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        FileStore {
            path,
            values: RefCell::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current map to disk.
    ///
    /// Uses the write-to-temp-then-rename pattern so a crash mid-write
    /// cannot corrupt the settings file.
    pub fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&*self.values.borrow())
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, json).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(())
    }

    fn persist(&self) -> bool {
        match self.flush() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to save settings to {}: {e}", self.path.display());
                false
            }
        }
    }
}

fn load_values(path: &Path) -> HashMap<String, StoredValue> {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.borrow().get(key).cloned()
    }

    fn put(&self, key: &str, value: StoredValue) -> bool {
        self.values.borrow_mut().insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&self, key: &str) -> bool {
        if self.values.borrow_mut().remove(key).is_none() {
            return false;
        }
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn roundtrip_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = FileStore::open(&path);
        assert!(store.put_int(crate::keys::VIBRATION_INTENSITY, 2));
        assert!(store.put_float(crate::keys::CAPTION_FONT_SCALE, 1.5));
        assert!(store.put_string(crate::keys::CAPTION_TYPEFACE, "serif"));
        drop(store);

        let store = FileStore::open(&path);
        assert_eq!(store.get_int(crate::keys::VIBRATION_INTENSITY, 0), 2);
        assert_eq!(store.get_float(crate::keys::CAPTION_FONT_SCALE, 1.0), 1.5);
        assert_eq!(store.get_string(crate::keys::CAPTION_TYPEFACE, ""), "serif");
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("absent.json"));
        assert_eq!(store.get_int("anything", 42), 42);
    }

    #[test]
    fn malformed_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert!(!store.contains("anything"));
        // The store stays usable and the next write repairs the file.
        assert!(store.put_int("k", 1));
        let store = FileStore::open(&path);
        assert_eq!(store.get_int("k", 0), 1);
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = FileStore::open(&path);
        assert!(store.put_bool("k", true));
        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = FileStore::open(&path);
        store.put_int("k", 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_is_a_flat_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = FileStore::open(&path);
        store.put_int(crate::keys::CAPTION_PRESET, -1);
        store.put_bool(crate::keys::CAPTIONS_ENABLED, true);

        let text = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[crate::keys::CAPTION_PRESET], -1);
        assert_eq!(parsed[crate::keys::CAPTIONS_ENABLED], 1);
    }

    #[test]
    fn remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = FileStore::open(&path);
        store.put_int("k", 1);
        assert!(store.remove("k"));
        assert!(!store.remove("k"));

        let store = FileStore::open(&path);
        assert!(!store.contains("k"));
    }
}
