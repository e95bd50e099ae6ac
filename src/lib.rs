//! Board-agnostic motion-control core for the microinjector drive
//!
//! This crate contains all firmware logic that does not depend on
//! specific hardware or on the serial console:
//!
//! - Hardware abstraction trait for the step/dir/enable driver
//! - Move specification types and validation limits
//! - Velocity profile math (constant-acceleration ramps)
//! - Per-tick move execution
//! - Stored program management
//! - Session state machine for the move lifecycle
//!
//! The console layer parses serial input into [`session::Request`]
//! values and renders the [`session::Event`] values it gets back. A
//! cooperative scheduler calls [`session::SessionStateMachine::tick`]
//! with a monotonic microsecond timestamp; nothing in here blocks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod motion;
pub mod program;
pub mod session;
pub mod traits;
