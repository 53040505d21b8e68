//! Durable key-value stores for the color-mode preference
//!
//! The preference only ever needs one string under one key, but stores are
//! keyed so several preferences can share a backing file.

use crate::error::{Result, ThemeError};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Per-origin durable key-value storage
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store, lost when the process exits
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a TOML file of string keys to string values
///
/// ```toml
/// color-mode = "sds-dark"
/// ```
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ThemeError::PersistenceUnavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            ThemeError::PersistenceUnavailable(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());

        let content = toml::to_string(&table).map_err(|e| {
            ThemeError::PersistenceUnavailable(format!("failed to serialize store: {}", e))
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ThemeError::PersistenceUnavailable(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|e| {
            ThemeError::PersistenceUnavailable(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Store for hosts without durable storage; every call fails
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableStore {
    fn default() -> Self {
        Self::new("no storage in this environment")
    }
}

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(ThemeError::PersistenceUnavailable(self.reason.clone()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ThemeError::PersistenceUnavailable(self.reason.clone()))
    }
}
