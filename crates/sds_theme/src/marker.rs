//! Root marker attributes
//!
//! The root marker stands in for the document root element: a small set of
//! string attributes that every independently rendered component can read.
//! It is the only broadcast channel for color-mode changes.
//!
//! Writes are synchronous, so a reader in the same tick always sees the new
//! value. Observers are notified later, when the host loop calls
//! [`RootMarker::flush`], and receive every record queued since their last
//! delivery. Observers are expected to re-read the attribute rather than
//! trust the record's contents.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, RwLock, TryLockError, Weak};

new_key_type! {
    /// Identifier of a registered marker observer
    pub struct ObserverId;
}

/// One attribute mutation, as queued for an observer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    /// Name of the attribute that changed
    pub attribute: String,
    /// Value before the mutation (`None` when the attribute was absent)
    pub old_value: Option<String>,
}

type ObserverCallback = Arc<Mutex<dyn FnMut(&[MutationRecord]) + Send>>;

struct Observer {
    /// Attribute name this observer is filtered on
    attribute: String,
    callback: ObserverCallback,
    pending: Vec<MutationRecord>,
}

/// Shared root attributes with mutation observation
#[derive(Default)]
pub struct RootMarker {
    attributes: RwLock<FxHashMap<String, String>>,
    observers: Mutex<SlotMap<ObserverId, Observer>>,
}

impl RootMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().unwrap().get(name).cloned()
    }

    /// Write an attribute and queue a record for each matching observer
    ///
    /// A record is queued even when the value is unchanged.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let old_value = self
            .attributes
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        tracing::trace!("marker: {}={:?} (was {:?})", name, value, old_value);
        self.enqueue(name, old_value);
    }

    /// Remove an attribute, queueing a record if it was present
    pub fn remove_attribute(&self, name: &str) {
        let old_value = self.attributes.write().unwrap().remove(name);
        if old_value.is_some() {
            self.enqueue(name, old_value);
        }
    }

    fn enqueue(&self, name: &str, old_value: Option<String>) {
        let mut observers = self.observers.lock().unwrap();
        for observer in observers.values_mut() {
            if observer.attribute == name {
                observer.pending.push(MutationRecord {
                    attribute: name.to_string(),
                    old_value: old_value.clone(),
                });
            }
        }
    }

    /// Observe mutations of one attribute
    ///
    /// The returned guard disconnects the observer when dropped.
    pub fn observe<F>(self: &Arc<Self>, attribute: &str, callback: F) -> MarkerObserver
    where
        F: FnMut(&[MutationRecord]) + Send + 'static,
    {
        let id = self.observers.lock().unwrap().insert(Observer {
            attribute: attribute.to_string(),
            callback: Arc::new(Mutex::new(callback)),
            pending: Vec::new(),
        });
        tracing::trace!("marker: observer {:?} attached to {}", id, attribute);

        MarkerObserver {
            marker: Arc::downgrade(self),
            id,
        }
    }

    fn disconnect(&self, id: ObserverId) {
        if self.observers.lock().unwrap().remove(id).is_some() {
            tracing::trace!("marker: observer {:?} disconnected", id);
        }
    }

    /// Number of connected observers
    pub fn observer_count(&self) -> usize {
        self.observers.lock().unwrap().len()
    }

    /// Check whether any observer has undelivered records
    pub fn has_pending(&self) -> bool {
        self.observers
            .lock()
            .unwrap()
            .values()
            .any(|o| !o.pending.is_empty())
    }

    /// Deliver queued records to their observers
    ///
    /// Callbacks run with no marker lock held, so they may read or write
    /// attributes. Records queued by a callback wait for the next flush.
    /// A callback may call `flush` itself; records for an observer whose
    /// callback is already running are put back and delivered later.
    /// Returns the number of records delivered.
    pub fn flush(&self) -> usize {
        let batches: Vec<(ObserverId, ObserverCallback, Vec<MutationRecord>)> = {
            let mut observers = self.observers.lock().unwrap();
            observers
                .iter_mut()
                .filter(|(_, o)| !o.pending.is_empty())
                .map(|(id, o)| (id, o.callback.clone(), std::mem::take(&mut o.pending)))
                .collect()
        };

        let mut delivered = 0;
        for (id, callback, records) in batches {
            let mut callback = match callback.try_lock() {
                Ok(callback) => callback,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => {
                    self.requeue(id, records);
                    continue;
                }
            };
            delivered += records.len();
            (&mut *callback)(&records);
        }
        delivered
    }

    /// Put undelivered records back ahead of anything queued since
    fn requeue(&self, id: ObserverId, mut records: Vec<MutationRecord>) {
        if let Some(observer) = self.observers.lock().unwrap().get_mut(id) {
            tracing::trace!("marker: observer {:?} busy, requeueing {}", id, records.len());
            records.append(&mut observer.pending);
            observer.pending = records;
        }
    }
}

/// Scoped marker subscription
///
/// Holds only a weak reference to the marker, so a subscription never keeps
/// the marker alive.
#[must_use = "dropping the guard disconnects the observer"]
pub struct MarkerObserver {
    marker: Weak<RootMarker>,
    id: ObserverId,
}

impl MarkerObserver {
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Disconnect now (same as dropping the guard)
    pub fn disconnect(self) {}
}

impl Drop for MarkerObserver {
    fn drop(&mut self) {
        if let Some(marker) = self.marker.upgrade() {
            marker.disconnect(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTR: &str = "data-color-mode";

    fn recorder(marker: &Arc<RootMarker>) -> (MarkerObserver, Arc<Mutex<Vec<MutationRecord>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let guard = marker.observe(ATTR, move |records| {
            sink.lock().unwrap().extend_from_slice(records);
        });
        (guard, seen)
    }

    #[test]
    fn writes_are_visible_before_flush() {
        let marker = Arc::new(RootMarker::new());
        let (_guard, seen) = recorder(&marker);

        marker.set_attribute(ATTR, "sds-dark");
        assert_eq!(marker.get_attribute(ATTR).as_deref(), Some("sds-dark"));
        assert!(seen.lock().unwrap().is_empty());
        assert!(marker.has_pending());

        assert_eq!(marker.flush(), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![MutationRecord {
                attribute: ATTR.to_string(),
                old_value: None,
            }]
        );
        assert!(!marker.has_pending());
    }

    #[test]
    fn records_batch_and_final_value_wins() {
        let marker = Arc::new(RootMarker::new());
        let reader = marker.clone();
        let last_read = Arc::new(Mutex::new(None));
        let sink = last_read.clone();
        let _guard = marker.observe(ATTR, move |records| {
            assert_eq!(records.len(), 2);
            *sink.lock().unwrap() = reader.get_attribute(ATTR);
        });

        marker.set_attribute(ATTR, "sds-dark");
        marker.set_attribute(ATTR, "brand-b-light");
        marker.flush();

        assert_eq!(last_read.lock().unwrap().as_deref(), Some("brand-b-light"));
    }

    #[test]
    fn filter_ignores_other_attributes() {
        let marker = Arc::new(RootMarker::new());
        let (_guard, seen) = recorder(&marker);

        marker.set_attribute("lang", "en");
        assert_eq!(marker.flush(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn callback_may_flush_without_deadlock() {
        let marker = Arc::new(RootMarker::new());
        let inner = Arc::downgrade(&marker);
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let _guard = marker.observe(ATTR, move |records| {
            let mut calls = sink.lock().unwrap();
            calls.push(records.len());
            if calls.len() == 1 {
                if let Some(marker) = inner.upgrade() {
                    marker.set_attribute(ATTR, "sds-dark");
                    assert_eq!(marker.flush(), 0);
                }
            }
        });

        marker.set_attribute(ATTR, "brand-b-light");
        assert_eq!(marker.flush(), 1);
        assert!(marker.has_pending());

        assert_eq!(marker.flush(), 1);
        assert_eq!(*calls.lock().unwrap(), vec![1, 1]);
        assert_eq!(marker.get_attribute(ATTR).as_deref(), Some("sds-dark"));
    }

    #[test]
    fn dropping_guard_disconnects() {
        let marker = Arc::new(RootMarker::new());
        let (guard, seen) = recorder(&marker);
        assert_eq!(marker.observer_count(), 1);

        marker.set_attribute(ATTR, "sds-dark");
        drop(guard);
        assert_eq!(marker.observer_count(), 0);

        // Undelivered records go away with the observer
        assert_eq!(marker.flush(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn remove_records_old_value_only_when_present() {
        let marker = Arc::new(RootMarker::new());
        let (_guard, seen) = recorder(&marker);

        marker.remove_attribute(ATTR);
        assert!(!marker.has_pending());

        marker.set_attribute(ATTR, "sds-light");
        marker.remove_attribute(ATTR);
        marker.flush();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].old_value.as_deref(), Some("sds-light"));
        assert_eq!(marker.get_attribute(ATTR), None);
    }

    #[test]
    fn guard_outliving_marker_is_harmless() {
        let marker = Arc::new(RootMarker::new());
        let (guard, _seen) = recorder(&marker);
        drop(marker);
        drop(guard);
    }
}
