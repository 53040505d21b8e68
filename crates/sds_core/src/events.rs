//! Event types
//!
//! The small set of host events a component reacts to.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Primary-button activation (press and release over the element)
    pub const CLICK: EventType = 8;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event addressed to one widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    /// Raw id of the target widget
    pub target: u64,
}

impl Event {
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self { event_type, target }
    }
}

