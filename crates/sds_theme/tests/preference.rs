use pretty_assertions::assert_eq;
use sds_theme::{
    ColorMode, ColorModePreference, FileStore, MemoryStore, PreferenceConfig, PreferenceStore,
    RootMarker, ThemeError,
};
use std::sync::{Arc, Mutex};

const ATTR: &str = "data-color-mode";
const KEY: &str = "color-mode";

/// Store whose contents survive the preference service, like browser storage across reloads
#[derive(Clone, Default)]
struct SharedStore(Arc<MemoryStore>);

impl PreferenceStore for SharedStore {
    fn load(&self, key: &str) -> sds_theme::Result<Option<String>> {
        self.0.load(key)
    }

    fn save(&self, key: &str, value: &str) -> sds_theme::Result<()> {
        self.0.save(key, value)
    }
}

/// Store that reads fine but rejects writes, like a full quota
struct ReadOnlyStore(Option<String>);

impl PreferenceStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> sds_theme::Result<Option<String>> {
        Ok(self.0.clone())
    }

    fn save(&self, _key: &str, _value: &str) -> sds_theme::Result<()> {
        Err(ThemeError::PersistenceUnavailable("quota exceeded".into()))
    }
}

fn preference_with(store: impl PreferenceStore + 'static, marker: &Arc<RootMarker>) -> ColorModePreference {
    ColorModePreference::new(PreferenceConfig::default(), Box::new(store), marker.clone())
}

#[test]
fn set_twice_is_idempotent() {
    let marker = Arc::new(RootMarker::new());
    let pref = preference_with(MemoryStore::new(), &marker);

    for mode in ColorMode::all() {
        pref.set(*mode);
        pref.set(*mode);
        assert_eq!(pref.get(), *mode);
        assert_eq!(marker.get_attribute(ATTR).as_deref(), Some(mode.as_str()));
    }
}

#[test]
fn reload_restores_persisted_mode() {
    let store = SharedStore::default();

    let first = preference_with(store.clone(), &Arc::new(RootMarker::new()));
    first.set(ColorMode::BrandBLight);
    drop(first);

    // Fresh session: new marker, same durable storage
    let second = preference_with(store, &Arc::new(RootMarker::new()));
    assert_eq!(second.get(), ColorMode::BrandBLight);
}

#[test]
fn reload_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = PreferenceConfig::default().storage_path(dir.path().join("prefs.toml"));

    let first = ColorModePreference::from_config(config.clone(), Arc::new(RootMarker::new()));
    first.set(ColorMode::SdsDark);

    let second = ColorModePreference::from_config(config, Arc::new(RootMarker::new()));
    assert_eq!(second.get(), ColorMode::SdsDark);

    let store = FileStore::new(dir.path().join("prefs.toml"));
    assert_eq!(store.load(KEY).unwrap().as_deref(), Some("sds-dark"));
}

#[test]
fn nothing_stored_resolves_to_configured_default() {
    let marker = Arc::new(RootMarker::new());
    let pref = ColorModePreference::new(
        PreferenceConfig::default().default_mode(ColorMode::SdsDark),
        Box::new(MemoryStore::new()),
        marker.clone(),
    );
    assert_eq!(pref.get(), ColorMode::SdsDark);

    let plain = preference_with(MemoryStore::new(), &Arc::new(RootMarker::new()));
    assert_eq!(plain.get(), ColorMode::SdsLight);
}

#[test]
fn invalid_persisted_value_falls_through_to_marker() {
    let marker = Arc::new(RootMarker::new());
    marker.set_attribute(ATTR, "brand-b-light");

    let pref = preference_with(MemoryStore::with_entry(KEY, "ultraviolet"), &marker);
    assert_eq!(pref.get(), ColorMode::BrandBLight);
}

#[test]
fn invalid_marker_value_falls_through_to_default() {
    let marker = Arc::new(RootMarker::new());
    marker.set_attribute(ATTR, "ultraviolet");

    let pref = ColorModePreference::new(
        PreferenceConfig::default().default_mode(ColorMode::SdsDark),
        Box::new(MemoryStore::new()),
        marker,
    );
    assert_eq!(pref.get(), ColorMode::SdsDark);
}

#[test]
fn persisted_value_beats_marker() {
    let marker = Arc::new(RootMarker::new());
    marker.set_attribute(ATTR, "sds-light");

    let pref = preference_with(MemoryStore::with_entry(KEY, "sds-dark"), &marker);
    assert_eq!(pref.get(), ColorMode::SdsDark);
}

#[test]
fn failed_writes_are_swallowed() {
    let marker = Arc::new(RootMarker::new());
    let pref = preference_with(ReadOnlyStore(None), &marker);

    pref.set(ColorMode::SdsDark);
    assert_eq!(pref.get(), ColorMode::SdsDark);
    assert_eq!(marker.get_attribute(ATTR).as_deref(), Some("sds-dark"));
}

#[test]
fn observers_see_only_the_final_mode() {
    let marker = Arc::new(RootMarker::new());
    let pref = preference_with(MemoryStore::new(), &marker);

    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = observed.clone();
    let reader = Arc::downgrade(&marker);
    let _guard = marker.observe(ATTR, move |_records| {
        if let Some(marker) = reader.upgrade() {
            sink.lock().unwrap().push(marker.get_attribute(ATTR));
        }
    });

    pref.set(ColorMode::SdsDark);
    pref.set(ColorMode::BrandBLight);

    // Same-tick readers see the latest write
    assert_eq!(marker.get_attribute(ATTR).as_deref(), Some("brand-b-light"));

    marker.flush();
    assert_eq!(
        *observed.lock().unwrap(),
        vec![Some("brand-b-light".to_string())]
    );
}
