//! Hardware abstraction traits
//!
//! These traits define the interface between the motion core and
//! hardware-specific implementations.

pub mod stepper;

pub use stepper::{Direction, StepPulseDriver};
