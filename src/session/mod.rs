//! Session control
//!
//! The state machine that sequences manual moves and stored programs,
//! and the request/event vocabulary it shares with the console layer.

pub mod events;
pub mod machine;

pub use events::{Event, RejectReason, Request};
pub use machine::{SessionPhase, SessionStateMachine};
