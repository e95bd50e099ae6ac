//! Move specification and validation limits

use crate::traits::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum distance of a single move, in steps
pub const MAX_DISTANCE_STEPS: u32 = 999_999;

/// Maximum commanded speed, in steps/s
pub const MAX_SPEED: u16 = 1000;

/// Minimum commanded speed, in steps/s
///
/// A motor commanded at 0 steps/s would stall indefinitely without
/// completing its move, so every profile floors here.
pub const MIN_SPEED: u16 = 1;

/// Maximum acceleration magnitude, in steps/s²
pub const MAX_ACCEL: i16 = 1000;

/// Validation errors for move parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecError {
    /// Distance not in [1, 999_999]
    DistanceOutOfRange,
    /// A speed not in [1, 1000]
    SpeedOutOfRange,
    /// |acceleration| > 1000
    AccelOutOfRange,
}

/// A single validated move specification
///
/// Immutable once created. Owned transiently by a manual move request
/// or for the session's lifetime by the program store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSpec {
    /// Travel direction
    pub direction: Direction,
    /// Total distance in steps
    pub distance_steps: u32,
    /// Speed at the start of the move, steps/s
    pub start_speed: u16,
    /// Speed at the end of the ramp, steps/s
    pub end_speed: u16,
    /// Signed acceleration in steps/s²; 0 = constant speed
    pub accel: i16,
}

impl MoveSpec {
    /// Create a validated move spec
    pub fn new(
        direction: Direction,
        distance_steps: u32,
        start_speed: u16,
        end_speed: u16,
        accel: i16,
    ) -> Result<Self, SpecError> {
        if distance_steps == 0 || distance_steps > MAX_DISTANCE_STEPS {
            return Err(SpecError::DistanceOutOfRange);
        }
        if start_speed < MIN_SPEED
            || start_speed > MAX_SPEED
            || end_speed < MIN_SPEED
            || end_speed > MAX_SPEED
        {
            return Err(SpecError::SpeedOutOfRange);
        }
        if accel < -MAX_ACCEL || accel > MAX_ACCEL {
            return Err(SpecError::AccelOutOfRange);
        }

        Ok(Self {
            direction,
            distance_steps,
            start_speed,
            end_speed,
            accel,
        })
    }

    /// Check if this move runs at constant speed
    pub fn is_constant_speed(&self) -> bool {
        self.accel == 0 || self.start_speed == self.end_speed
    }
}
