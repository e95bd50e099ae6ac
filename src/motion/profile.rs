//! Velocity profile for acceleration/deceleration ramps
//!
//! Applies the constant-acceleration kinematic relation
//! `v² = v₀² + 2·a·Δx` in the step domain: "distance" here is the
//! count of steps already taken, not physical travel.

use crate::config::{MoveSpec, MIN_SPEED};

/// Speed-vs-progress function governing one move
///
/// Pure math, no state: the same profile queried at the same progress
/// always returns the same speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityProfile {
    start_speed: u16,
    end_speed: u16,
    accel: i16,
}

impl VelocityProfile {
    /// Build the profile for a move spec
    pub fn from_spec(spec: &MoveSpec) -> Self {
        Self {
            start_speed: spec.start_speed,
            end_speed: spec.end_speed,
            accel: spec.accel,
        }
    }

    /// Commanded speed after `steps_done` completed steps, in steps/s
    ///
    /// The returned sequence is monotonic in the direction implied by
    /// `sign(accel)` until it reaches `end_speed`, then constant. Never
    /// returns less than [`MIN_SPEED`].
    pub fn speed_at(&self, steps_done: u32) -> u16 {
        if self.accel == 0 || self.start_speed == self.end_speed {
            return self.start_speed.max(MIN_SPEED);
        }

        // v² = v₀² + 2·a·steps. Worst case fits comfortably in i64:
        // 1000² + 2·1000·999_999 ≈ 2.0e9.
        let v0_sq = i64::from(self.start_speed) * i64::from(self.start_speed);
        let v_sq = v0_sq + 2 * i64::from(self.accel) * i64::from(steps_done);

        // Deceleration past the v² = 0 point floors at zero rather
        // than going imaginary.
        let v = (v_sq.max(0) as u64).isqrt() as u16;

        let v = if self.accel > 0 {
            v.min(self.end_speed)
        } else {
            v.max(self.end_speed)
        };

        v.max(MIN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Direction;
    use proptest::prelude::*;

    fn profile(start: u16, end: u16, accel: i16) -> VelocityProfile {
        let spec = MoveSpec::new(Direction::Forward, 1000, start, end, accel).unwrap();
        VelocityProfile::from_spec(&spec)
    }

    #[test]
    fn test_constant_speed() {
        let p = profile(300, 300, 0);
        for steps in [0u32, 1, 50, 999] {
            assert_eq!(p.speed_at(steps), 300);
        }
    }

    #[test]
    fn test_equal_speeds_ignore_accel() {
        let p = profile(200, 200, 500);
        assert_eq!(p.speed_at(0), 200);
        assert_eq!(p.speed_at(900), 200);
    }

    #[test]
    fn test_acceleration_ramp() {
        // v² = 10² + 2·5·steps
        let p = profile(10, 50, 5);
        assert_eq!(p.speed_at(0), 10);
        // Mid-ramp at 160 steps: v² = 100 + 1600 = 1700, v = 41
        assert_eq!(p.speed_at(160), 41);
        // At 240 steps: v² = 100 + 2400 = 2500, v = 50 exactly
        assert_eq!(p.speed_at(240), 50);
        // At 320 steps: v² = 3300, v ≈ 57, clamped to end_speed
        assert_eq!(p.speed_at(320), 50);
        // Past the ramp the speed clamps at end_speed
        assert_eq!(p.speed_at(300), 50);
        assert_eq!(p.speed_at(999), 50);
    }

    #[test]
    fn test_deceleration_floors_at_end_speed() {
        // v² = 500² - 2·100·steps
        let p = profile(500, 100, -100);
        assert_eq!(p.speed_at(0), 500);
        // At 1200 steps: v² = 250_000 - 240_000 = 10_000, v = 100
        assert_eq!(p.speed_at(1200), 100);
        assert_eq!(p.speed_at(2000), 100);
    }

    #[test]
    fn test_deceleration_to_stop_floors_at_min() {
        // Hard deceleration drives v² negative long before the move
        // ends; the profile must keep commanding forward progress.
        let p = profile(50, 1, -1000);
        assert_eq!(p.speed_at(0), 50);
        assert_eq!(p.speed_at(500), MIN_SPEED);
    }

    proptest! {
        #[test]
        fn accel_never_exceeds_end_speed(
            start in 1u16..=1000,
            end in 1u16..=1000,
            accel in 1i16..=1000,
            steps in 0u32..1000,
        ) {
            let p = profile(start, end, accel);
            prop_assert!(p.speed_at(steps) <= end);
        }

        #[test]
        fn accel_sequence_is_non_decreasing(
            start in 1u16..=1000,
            end in 1u16..=1000,
            accel in 1i16..=1000,
            steps in 0u32..999,
        ) {
            let p = profile(start, end, accel);
            prop_assert!(p.speed_at(steps) <= p.speed_at(steps + 1));
        }

        #[test]
        fn decel_sequence_is_non_increasing_and_bounded(
            start in 1u16..=1000,
            end in 1u16..=1000,
            accel in -1000i16..=-1,
            steps in 0u32..999,
        ) {
            let p = profile(start, end, accel);
            prop_assert!(p.speed_at(steps) >= p.speed_at(steps + 1));
            prop_assert!(p.speed_at(steps + 1) >= end.max(MIN_SPEED));
        }

        #[test]
        fn zero_accel_is_constant(
            start in 1u16..=1000,
            end in 1u16..=1000,
            steps in 0u32..1000,
        ) {
            let p = profile(start, end, 0);
            prop_assert_eq!(p.speed_at(steps), start);
        }
    }
}
