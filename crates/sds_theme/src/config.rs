//! Color-mode preference configuration (sds.toml)

use crate::error::{Result, ThemeError};
use crate::mode::ColorMode;
use crate::storage::{FileStore, MemoryStore, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key the preference is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "color-mode";

/// Root marker attribute carrying the active mode
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-color-mode";

/// Preference service configuration
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreferenceConfig {
    /// Key used in the durable store
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Root marker attribute name
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,
    /// Mode used when neither the store nor the marker has a valid value
    #[serde(default)]
    pub default_mode: ColorMode,
    /// Backing file for the durable store; in-memory when unset
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER_ATTRIBUTE.to_string()
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            marker_attribute: default_marker_attribute(),
            default_mode: ColorMode::default(),
            storage_path: None,
        }
    }
}

impl PreferenceConfig {
    /// Load configuration from a file, or from `sds.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("sds.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ThemeError::Config(format!("failed to read {}: {}", config_path.display(), e))
        })?;

        Self::from_toml_str(&content)
            .map_err(|e| ThemeError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Set the default mode
    pub fn default_mode(mut self, mode: ColorMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Set the backing file for the store
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Build the store this configuration describes
    pub fn open_store(&self) -> Box<dyn PreferenceStore> {
        match &self.storage_path {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config = PreferenceConfig::from_toml_str("").unwrap();
        assert_eq!(config, PreferenceConfig::default());
        assert_eq!(config.storage_key, "color-mode");
        assert_eq!(config.marker_attribute, "data-color-mode");
        assert_eq!(config.default_mode, ColorMode::SdsLight);
    }

    #[test]
    fn parses_overrides() {
        let config = PreferenceConfig::from_toml_str(
            r#"
            default_mode = "brand-b-light"
            storage_path = "/tmp/sds-prefs.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_mode, ColorMode::BrandBLight);
        assert_eq!(
            config.storage_path.as_deref(),
            Some(Path::new("/tmp/sds-prefs.toml"))
        );
    }

    #[test]
    fn invalid_mode_is_config_error() {
        let err = PreferenceConfig::from_toml_str("default_mode = \"neon\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn load_from_directory_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = PreferenceConfig::default().default_mode(ColorMode::SdsDark);
        fs::write(dir.path().join("sds.toml"), config.to_toml().unwrap()).unwrap();

        let loaded = PreferenceConfig::load_from_path(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PreferenceConfig::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }
}
