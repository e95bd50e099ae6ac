//! Stored move programs
//!
//! A program is an ordered, bounded sequence of move specs executed
//! back-to-back by the session state machine.

pub mod store;

pub use store::{ProgramStore, StoreError, MAX_PROGRAM_STEPS};
