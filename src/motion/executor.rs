//! Move execution - rate-limited step generation
//!
//! One executor owns one active move. Each scheduler tick it asks the
//! velocity profile for the current commanded speed and requests at
//! most one step from the driver when the step interval has elapsed.

use crate::config::MoveSpec;
use crate::motion::profile::VelocityProfile;
use crate::traits::{Direction, StepPulseDriver};

/// Microseconds per second, for step interval math
const MICROS_PER_S: u64 = 1_000_000;

/// Progress of the active move
///
/// Exists only while a move is in flight; created when the move starts
/// and discarded on completion or abort. Exclusively owned by its
/// [`MoveExecutor`], never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveProgress {
    /// The move being executed
    pub spec: MoveSpec,
    /// Steps completed so far
    pub steps_done: u32,
    /// Commanded speed on the last tick, steps/s
    pub current_speed: u16,
    /// Timestamp of the last step taken (or of the move start)
    last_step_at_us: u64,
}

/// Executes exactly one move, one tick at a time
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveExecutor {
    profile: VelocityProfile,
    progress: MoveProgress,
}

impl MoveExecutor {
    /// Start executing a move
    ///
    /// The first step falls due one step interval after `now_us`.
    pub fn start(spec: MoveSpec, now_us: u64) -> Self {
        Self {
            profile: VelocityProfile::from_spec(&spec),
            progress: MoveProgress {
                spec,
                steps_done: 0,
                current_speed: spec.start_speed,
                last_step_at_us: now_us,
            },
        }
    }

    /// Steps completed so far
    pub fn steps_done(&self) -> u32 {
        self.progress.steps_done
    }

    /// Commanded speed as of the last tick, steps/s
    pub fn current_speed(&self) -> u16 {
        self.progress.current_speed
    }

    /// Direction of the move
    pub fn direction(&self) -> Direction {
        self.progress.spec.direction
    }

    /// Check if the move has completed
    pub fn is_done(&self) -> bool {
        self.progress.steps_done >= self.progress.spec.distance_steps
    }

    /// Current progress snapshot
    pub fn progress(&self) -> &MoveProgress {
        &self.progress
    }

    /// Advance the move by one tick
    ///
    /// Requests at most one step from the driver, and none once the
    /// move is done. Returns `true` when all steps have been taken.
    ///
    /// # Arguments
    /// * `now_us` - Monotonic timestamp in microseconds
    /// * `driver` - Step pulse driver, enabled by the caller
    pub fn tick<D: StepPulseDriver>(&mut self, now_us: u64, driver: &mut D) -> bool {
        if self.is_done() {
            return true;
        }

        self.progress.current_speed = self.profile.speed_at(self.progress.steps_done);

        // Step interval is the reciprocal of the commanded speed.
        // current_speed is floored at 1 by the profile, so this never
        // divides by zero.
        let interval_us = MICROS_PER_S / u64::from(self.progress.current_speed);
        let elapsed_us = now_us.saturating_sub(self.progress.last_step_at_us);

        if elapsed_us >= interval_us {
            driver.step(self.progress.spec.direction);
            self.progress.steps_done += 1;
            self.progress.last_step_at_us = now_us;
        }

        self.is_done()
    }
}
