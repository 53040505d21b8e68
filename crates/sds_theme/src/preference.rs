//! Color-mode preference service
//!
//! One instance is owned per rendering tree and shared through `Arc`.
//! The service keeps three copies of the active mode:
//!
//! - in memory (authoritative for the session),
//! - on the root marker (written synchronously by every `set`),
//! - in the durable store (best effort, failures are logged and ignored).
//!
//! Components never subscribe to the service. They observe the root marker
//! and re-read the attribute, which keeps trees that do not share an owner
//! in sync without a subscriber list here.

use crate::config::PreferenceConfig;
use crate::marker::RootMarker;
use crate::mode::ColorMode;
use crate::storage::PreferenceStore;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Process-wide color-mode preference
pub struct ColorModePreference {
    config: PreferenceConfig,
    store: Box<dyn PreferenceStore>,
    marker: Arc<RootMarker>,
    /// `None` until the first read or write of the session
    mode: RwLock<Option<ColorMode>>,
}

impl ColorModePreference {
    pub fn new(
        config: PreferenceConfig,
        store: Box<dyn PreferenceStore>,
        marker: Arc<RootMarker>,
    ) -> Self {
        Self {
            config,
            store,
            marker,
            mode: RwLock::new(None),
        }
    }

    /// Build with the store the configuration describes
    pub fn from_config(config: PreferenceConfig, marker: Arc<RootMarker>) -> Self {
        let store = config.open_store();
        Self::new(config, store, marker)
    }

    pub fn config(&self) -> &PreferenceConfig {
        &self.config
    }

    pub fn marker(&self) -> &Arc<RootMarker> {
        &self.marker
    }

    /// Current mode
    ///
    /// The first read of a session resolves, in order: the persisted value,
    /// the value already on the marker, the configured default. Values that
    /// are not valid modes are skipped.
    pub fn get(&self) -> ColorMode {
        if let Some(mode) = *self.mode.read().unwrap() {
            return mode;
        }

        let mut slot = self.mode.write().unwrap();
        *slot.get_or_insert_with(|| self.resolve_initial())
    }

    fn resolve_initial(&self) -> ColorMode {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(value)) => match value.parse::<ColorMode>() {
                Ok(mode) => {
                    debug!("ColorModePreference: restored {} from store", mode);
                    return mode;
                }
                Err(e) => debug!("ColorModePreference: ignoring persisted value, {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("ColorModePreference: {}", e),
        }

        if let Some(value) = self.marker.get_attribute(&self.config.marker_attribute) {
            match value.parse::<ColorMode>() {
                Ok(mode) => {
                    debug!("ColorModePreference: adopted {} from marker", mode);
                    return mode;
                }
                Err(e) => debug!("ColorModePreference: ignoring marker value, {}", e),
            }
        }

        self.config.default_mode
    }

    /// Switch the active mode
    ///
    /// The marker is written before this returns; persistence is best effort.
    pub fn set(&self, mode: ColorMode) {
        let previous = self.mode.write().unwrap().replace(mode);
        debug!("ColorModePreference::set - {:?} -> {}", previous, mode);

        self.marker
            .set_attribute(&self.config.marker_attribute, mode.as_str());
        self.persist(mode);
    }

    /// Mirror the resolved mode onto the marker and the store
    ///
    /// Call once when the owning tree attaches.
    pub fn mount(&self) -> ColorMode {
        let mode = self.get();
        self.marker
            .set_attribute(&self.config.marker_attribute, mode.as_str());
        self.persist(mode);
        mode
    }

    fn persist(&self, mode: ColorMode) {
        if let Err(e) = self.store.save(&self.config.storage_key, mode.as_str()) {
            warn!("ColorModePreference: could not persist {}: {}", mode, e);
        }
    }
}

/// Write the persisted mode onto the marker before anything renders
///
/// Missing, invalid, or unreadable values put [`ColorMode::FALLBACK`] on
/// the marker. Returns the mode written.
pub fn bootstrap_marker(
    store: &dyn PreferenceStore,
    marker: &RootMarker,
    config: &PreferenceConfig,
) -> ColorMode {
    let mode = match store.load(&config.storage_key) {
        Ok(Some(value)) => ColorMode::parse(&value).unwrap_or(ColorMode::FALLBACK),
        Ok(None) => ColorMode::FALLBACK,
        Err(e) => {
            warn!("bootstrap_marker: {}", e);
            ColorMode::FALLBACK
        }
    };

    marker.set_attribute(&config.marker_attribute, mode.as_str());
    mode
}
