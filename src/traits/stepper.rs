//! Step pulse driver trait
//!
//! Abstracts over the step/dir/enable interface of the attached driver
//! hardware (A4988, DRV8825, ULN2003 half-step sequencer, etc.). The
//! core only ever asks for single steps; pulse widths and coil
//! sequencing are the implementation's problem.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Travel direction along the lead screw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward the syringe (inject)
    Forward,
    /// Away from the syringe (withdraw)
    Backward,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Trait for step pulse drivers
///
/// Implementations translate a "take one step" request into the
/// electrical sequence for the attached hardware. The core guarantees
/// it only calls [`step`](StepPulseDriver::step) between an
/// [`enable`](StepPulseDriver::enable) and the matching
/// [`disable`](StepPulseDriver::disable).
pub trait StepPulseDriver {
    /// Energize the motor driver
    ///
    /// The motor holds position while enabled.
    fn enable(&mut self);

    /// De-energize the motor driver
    ///
    /// Idle coils must never hold current indefinitely; the core calls
    /// this whenever a move ends, however it ends.
    fn disable(&mut self);

    /// Take exactly one step in the given direction
    fn step(&mut self, direction: Direction);

    /// Check if the driver is currently energized
    fn is_enabled(&self) -> bool;
}
