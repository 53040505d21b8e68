//! Pointer interaction tracking
//!
//! Each interactive component owns one [`InteractionTracker`]. It combines
//! the caller's `state` prop and `disabled` flag with a two-state hover
//! machine and yields the effective visual state:
//!
//! 1. Disabled, when the flag is set or the prop says Disabled
//! 2. Hover, when the pointer is over the control
//! 3. the prop otherwise
//!
//! Hovering is refused while disabled. Leaving always clears the hover flag,
//! after which the prop shows through verbatim (a prop of Hover stays Hover).

use crate::props::{EventHandlers, VisualState};
use sds_core::events::{event_types, Event};
use sds_core::fsm::{StateMachine, Transition};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hover machine states
pub mod states {
    use sds_core::fsm::StateId;

    pub const REST: StateId = 0;
    pub const HOVERED: StateId = 1;
}

/// Hover tracking for one component instance
pub struct InteractionTracker {
    fsm: StateMachine,
    prop: VisualState,
    /// Read by the enter guard
    blocked: Arc<AtomicBool>,
}

impl InteractionTracker {
    pub fn new(state: VisualState, disabled: bool) -> Self {
        let blocked = Arc::new(AtomicBool::new(
            disabled || state == VisualState::Disabled,
        ));

        let guard_flag = blocked.clone();
        let fsm = StateMachine::builder(states::REST)
            .transition(
                Transition::new(states::REST, event_types::POINTER_ENTER, states::HOVERED)
                    .with_guard(move || !guard_flag.load(Ordering::Relaxed)),
            )
            .on(states::HOVERED, event_types::POINTER_LEAVE, states::REST)
            .build();

        Self {
            fsm,
            prop: state,
            blocked,
        }
    }

    /// Replace the caller's props, keeping the hover flag
    pub fn set_props(&mut self, state: VisualState, disabled: bool) {
        self.prop = state;
        self.blocked
            .store(disabled || state == VisualState::Disabled, Ordering::Relaxed);
    }

    pub fn prop_state(&self) -> VisualState {
        self.prop
    }

    /// True when the flag or the prop disables the control
    pub fn is_disabled(&self) -> bool {
        self.blocked.load(Ordering::Relaxed)
    }

    pub fn is_hovered(&self) -> bool {
        self.fsm.is_in(states::HOVERED)
    }

    /// Pointer entered; returns true if the hover flag changed
    pub fn pointer_enter(&mut self) -> bool {
        let before = self.fsm.current_state();
        self.fsm.send(event_types::POINTER_ENTER) != before
    }

    /// Pointer left; returns true if the hover flag changed
    pub fn pointer_leave(&mut self) -> bool {
        let before = self.fsm.current_state();
        self.fsm.send(event_types::POINTER_LEAVE) != before
    }

    /// State to hand to the resolver
    pub fn effective_state(&self) -> VisualState {
        if self.is_disabled() {
            VisualState::Disabled
        } else if self.is_hovered() {
            VisualState::Hover
        } else {
            self.prop
        }
    }

    /// Route an event through the tracker and on to the caller's handlers
    ///
    /// Enter and leave handlers always run. Click handlers run only while
    /// enabled. Returns true if the effective state may have changed.
    pub fn dispatch(&mut self, handlers: &mut EventHandlers, event: &Event) -> bool {
        match event.event_type {
            event_types::POINTER_ENTER => {
                let changed = self.pointer_enter();
                handlers.pointer_enter(event);
                changed
            }
            event_types::POINTER_LEAVE => {
                let changed = self.pointer_leave();
                handlers.pointer_leave(event);
                changed
            }
            event_types::CLICK => {
                if self.is_disabled() {
                    tracing::trace!("click swallowed by disabled control {}", event.target);
                } else {
                    handlers.click(event);
                }
                false
            }
            _ => false,
        }
    }
}

impl Default for InteractionTracker {
    fn default() -> Self {
        Self::new(VisualState::Default, false)
    }
}
