//! Settings store for the Claro accessibility surface
//!
//! This crate owns the upstream half of the preference-controller
//! contract: a synchronous, local key-value store of persisted settings.
//! - `SettingsStore`: the typed get/put contract every controller binds to
//! - `MemoryStore`: in-process store for tests and embedders
//! - `FileStore`: JSON-file-backed store in the user config directory
//! - `keys`: the catalog of stable setting keys
//!
//! Reads never fail: a missing or type-mismatched entry degrades to the
//! caller-supplied default. Writes report success as a plain bool, with
//! no retry. Everything is single-threaded by contract; implementations
//! use interior mutability so one shared `Rc<dyn SettingsStore>` handle
//! can serve many controllers.

pub mod keys;

mod file;
mod memory;

pub use file::{default_settings_path, FileStore, StoreError};
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

/// A persisted setting value.
///
/// Booleans are encoded as `Int(0)` / `Int(1)`; the store schema has no
/// separate boolean variant.
///
/// # Serialization
/// Untagged, so the settings file stays a flat JSON object of plain
/// numbers and strings. `Int` must precede `Float` so whole numbers
/// parse as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Int(i32),
    Float(f32),
    Text(String),
}

/// The key-value settings contract controllers bind to.
pub trait SettingsStore {
    /// Raw read. `None` when the key has no persisted value.
    fn get(&self, key: &str) -> Option<StoredValue>;

    /// Raw write. Returns whether the value was persisted.
    fn put(&self, key: &str, value: StoredValue) -> bool;

    /// Clear a persisted value, reverting the key to its default.
    /// Returns false when the key was already unset.
    fn remove(&self, key: &str) -> bool;

    /// Whether the key has a persisted value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(StoredValue::Int(v)) => v,
            _ => default,
        }
    }

    fn put_int(&self, key: &str, value: i32) -> bool {
        self.put(key, StoredValue::Int(value))
    }

    /// Integer entries are widened on read so an int-valued file entry
    /// satisfies a float setting.
    fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.get(key) {
            Some(StoredValue::Float(v)) => v,
            Some(StoredValue::Int(v)) => v as f32,
            _ => default,
        }
    }

    fn put_float(&self, key: &str, value: f32) -> bool {
        self.put(key, StoredValue::Float(value))
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(StoredValue::Text(v)) => v,
            _ => default.to_string(),
        }
    }

    fn put_string(&self, key: &str, value: &str) -> bool {
        self.put(key, StoredValue::Text(value.to_string()))
    }

    /// Booleans ride the int encoding: unset resolves to the default,
    /// zero is false, anything else is true.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(StoredValue::Int(v)) => v != 0,
            _ => default,
        }
    }

    fn put_bool(&self, key: &str, value: bool) -> bool {
        self.put(key, StoredValue::Int(value as i32))
    }
}
