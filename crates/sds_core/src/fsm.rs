//! State Machine Runtime
//!
//! Flat statecharts for component interaction states: a transition table
//! keyed by (state, event), where each transition may carry a guard.

use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
    pub guard: Option<Guard>,
}

impl Transition {
    /// Create a transition without a guard
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
        }
    }

    /// Only take this transition while `guard` returns true
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    fn matches(&self, state: StateId, event: EventId) -> bool {
        self.from_state == state
            && self.event == event
            && self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Component machines hold a handful of transitions
type TransitionTable = SmallVec<[Transition; 4]>;

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: TransitionTable,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: StateId, event: EventId, to: StateId) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: TransitionTable,
}

impl StateMachine {
    /// Create a builder for a state machine
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Returns the state after the event. Events with no matching transition
    /// (or whose guard rejects) leave the machine where it is. The first
    /// matching transition in insertion order wins.
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;

        if let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.matches(current, event))
        {
            self.current_state = transition.to_state;
            tracing::trace!("fsm: {} --{}--> {}", current, event, self.current_state);
        }

        self.current_state
    }
}
