//! Widget context
//!
//! Owns the color-mode service for one rendering tree and the bookkeeping
//! around it: registered widget ids, their marker subscriptions, the set of
//! widgets that need a rebuild, and the mode each widget last observed.

use crate::widget::WidgetId;
use rustc_hash::{FxHashMap, FxHashSet};
use sds_core::events::{event_types, Event};
use sds_theme::{ColorMode, ColorModePreference, MarkerObserver, RootMarker};
use slotmap::SlotMap;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

#[derive(Default)]
struct WidgetEntry {
    /// Present while mounted
    observer: Option<MarkerObserver>,
}

/// Per-tree widget registry
pub struct WidgetContext {
    preference: Arc<ColorModePreference>,
    widgets: SlotMap<WidgetId, WidgetEntry>,
    dirty: Arc<Mutex<FxHashSet<WidgetId>>>,
    observed_modes: Arc<Mutex<FxHashMap<WidgetId, String>>>,
}

impl WidgetContext {
    pub fn new(preference: Arc<ColorModePreference>) -> Self {
        Self {
            preference,
            widgets: SlotMap::with_key(),
            dirty: Arc::new(Mutex::new(FxHashSet::default())),
            observed_modes: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    pub fn preference(&self) -> &Arc<ColorModePreference> {
        &self.preference
    }

    pub fn marker(&self) -> &Arc<RootMarker> {
        self.preference.marker()
    }

    /// Register a widget and get its id
    pub fn register(&mut self) -> WidgetId {
        self.widgets.insert(WidgetEntry::default())
    }

    /// Forget a widget, dropping its subscription
    pub fn unregister(&mut self, id: WidgetId) {
        if self.widgets.remove(id).is_some() {
            self.forget(id);
        }
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Start observing the color-mode marker for `id`
    ///
    /// Records the current marker value (`sds-light` when absent) and
    /// flags the widget dirty on every later delivery. Returns false for
    /// unknown ids. Mounting twice keeps the first subscription.
    pub fn mount(&mut self, id: WidgetId) -> bool {
        let attribute = self.preference.config().marker_attribute.clone();
        let marker = self.preference.marker().clone();

        let Some(entry) = self.widgets.get_mut(id) else {
            return false;
        };
        if entry.observer.is_some() {
            return true;
        }

        let current = read_mode(&marker, &attribute);
        self.observed_modes.lock().unwrap().insert(id, current);

        let weak: Weak<RootMarker> = Arc::downgrade(&marker);
        let dirty = self.dirty.clone();
        let observed = self.observed_modes.clone();
        let watched = attribute.clone();
        entry.observer = Some(marker.observe(&attribute, move |records| {
            if records.is_empty() {
                return;
            }
            if let Some(marker) = weak.upgrade() {
                observed
                    .lock()
                    .unwrap()
                    .insert(id, read_mode(&marker, &watched));
            }
            dirty.lock().unwrap().insert(id);
        }));

        debug!("WidgetContext: mounted {:?}", id);
        true
    }

    /// Stop observing for `id`; later mode changes leave it clean
    pub fn unmount(&mut self, id: WidgetId) {
        if let Some(entry) = self.widgets.get_mut(id) {
            if entry.observer.take().is_some() {
                debug!("WidgetContext: unmounted {:?}", id);
            }
        }
        self.forget(id);
    }

    /// Apply a mount or unmount event to `id`
    ///
    /// Returns false, doing nothing, for any other event type.
    pub fn apply_lifecycle(&mut self, id: WidgetId, event: &Event) -> bool {
        match event.event_type {
            event_types::MOUNT => {
                self.mount(id);
                true
            }
            event_types::UNMOUNT => {
                self.unmount(id);
                true
            }
            _ => false,
        }
    }

    pub fn is_mounted(&self, id: WidgetId) -> bool {
        self.widgets
            .get(id)
            .is_some_and(|entry| entry.observer.is_some())
    }

    fn forget(&self, id: WidgetId) {
        self.dirty.lock().unwrap().remove(&id);
        self.observed_modes.lock().unwrap().remove(&id);
    }

    /// Flag a widget for rebuild
    pub fn mark_dirty(&self, id: WidgetId) {
        if self.widgets.contains_key(id) {
            self.dirty.lock().unwrap().insert(id);
        }
    }

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.lock().unwrap().contains(&id)
    }

    /// Drain the dirty set
    pub fn take_dirty(&self) -> Vec<WidgetId> {
        self.dirty.lock().unwrap().drain().collect()
    }

    /// Marker value last observed by a mounted widget
    pub fn observed_mode(&self, id: WidgetId) -> Option<String> {
        self.observed_modes.lock().unwrap().get(&id).cloned()
    }

    /// Current mode as the service reports it
    pub fn color_mode(&self) -> ColorMode {
        self.preference.get()
    }

    /// Deliver pending marker mutations to mounted widgets
    pub fn flush_mutations(&self) -> usize {
        self.preference.marker().flush()
    }
}

fn read_mode(marker: &RootMarker, attribute: &str) -> String {
    marker
        .get_attribute(attribute)
        .unwrap_or_else(|| ColorMode::FALLBACK.as_str().to_string())
}
