//! SDS Core Runtime
//!
//! Foundational primitives shared by the SDS component crates:
//!
//! - **Events**: pointer and lifecycle events delivered to components
//! - **State Machines**: flat statecharts with guards, used for interaction states
//!
//! # Example
//!
//! ```rust
//! use sds_core::events::event_types;
//! use sds_core::fsm::StateMachine;
//!
//! const IDLE: u32 = 0;
//! const HOVERED: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, event_types::POINTER_ENTER, HOVERED)
//!     .on(HOVERED, event_types::POINTER_LEAVE, IDLE)
//!     .build();
//!
//! fsm.send(event_types::POINTER_ENTER);
//! assert!(fsm.is_in(HOVERED));
//! ```

pub mod events;
pub mod fsm;

pub use events::{Event, EventType};
pub use fsm::{EventId, StateId, StateMachine, Transition};
