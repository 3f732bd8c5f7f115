//! Velocity estimation for release (fling) decisions.
//!
//! [`VelocityTracker1D`] uses the impulse strategy: it treats each pair of
//! samples as a push that adds kinetic energy and converts the accumulated
//! energy back into a speed. [`VelocityTracker`] pairs two of them to follow
//! one pointer in both axes.

use floatview_ui_graphics::Point;

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one count.
const HORIZON_MS: u64 = 100;

/// A gap this long between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: u64,
    value: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records `position` at `time_ms`. Timestamps are expected to be non-decreasing.
    pub fn add_data_point(&mut self, time_ms: u64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample {
            time_ms,
            value: position,
        });
    }

    /// Velocity in units per millisecond, or `0.0` without two usable samples.
    pub fn velocity_per_ms(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let mut index = self.newest;
        let mut previous_time = newest.time_ms;
        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.abs_diff(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_time = newest.time_ms;

            positions[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        impulse_velocity(&positions[..count], &times[..count])
    }

    /// Velocity in units per second.
    pub fn calculate_velocity(&self) -> f32 {
        self.velocity_per_ms() * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        self.calculate_velocity_in_units(1_000, max_velocity)
    }

    /// Velocity in units per `units_ms` milliseconds, clamped to `±max_velocity`.
    pub fn calculate_velocity_in_units(&self, units_ms: u32, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity_per_ms() * units_ms as f32;
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn is_empty(&self) -> bool {
        self.samples[self.newest].is_none()
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Impulse estimate over samples ordered newest first, `times` as negative ages.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let count = positions.len();
    if count < 2 {
        return 0.0;
    }

    let oldest = count - 1;
    let mut work = 0.0f32;
    let mut next_time = times[oldest];
    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// Two-axis tracker for a single pointer.
///
/// Call [`compute_current_velocity`](Self::compute_current_velocity) once,
/// then read [`x_velocity`](Self::x_velocity)/[`y_velocity`](Self::y_velocity).
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
    computed: Point,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: u64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Computes velocity in pixels per `units_ms` milliseconds, each axis clamped to `±max_velocity`.
    pub fn compute_current_velocity(&mut self, units_ms: u32, max_velocity: f32) {
        self.computed = Point::new(
            self.x.calculate_velocity_in_units(units_ms, max_velocity),
            self.y.calculate_velocity_in_units(units_ms, max_velocity),
        );
    }

    pub fn x_velocity(&self) -> f32 {
        self.computed.x
    }

    pub fn y_velocity(&self) -> f32 {
        self.computed.y
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn clear(&mut self) {
        self.x.reset();
        self.y.reset();
        self.computed = Point::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity_is_exact() {
        let mut tracker = VelocityTracker1D::new();
        // 15 px every 10 ms upward
        for (i, y) in [500.0, 485.0, 470.0, 455.0].into_iter().enumerate() {
            tracker.add_data_point(i as u64 * 10, y);
        }

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity + 1500.0).abs() < 1.0,
            "Expected ~-1500, got {}",
            velocity
        );
    }

    #[test]
    fn velocity_is_capped_both_ways() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn invalid_max_yields_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        assert_eq!(tracker.calculate_velocity_with_max(0.0), 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(f32::INFINITY), 0.0);
    }

    #[test]
    fn units_scale_the_result() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 10.0);
        tracker.add_data_point(20, 20.0);

        let per_ms = tracker.calculate_velocity_in_units(1, 1_000.0);
        let per_second = tracker.calculate_velocity_in_units(1_000, 1_000.0);
        assert!((per_ms - 1.0).abs() < 0.01, "got {}", per_ms);
        assert!((per_second - 1_000.0).abs() < 1.0, "got {}", per_second);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 5_000.0);
        tracker.add_data_point(150, 100.0);
        tracker.add_data_point(160, 200.0);
        tracker.add_data_point(170, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 100.0,
            "Stale sample leaked into estimate: {}",
            velocity
        );
    }

    #[test]
    fn pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn two_axis_tracker_reports_each_axis() {
        let mut tracker = VelocityTracker::new();
        for step in 0..4u64 {
            tracker.add_position(step * 10, Point::new(0.0, 400.0 - step as f32 * 20.0));
        }

        tracker.compute_current_velocity(1_000, 8_000.0);
        assert!((tracker.y_velocity() + 2_000.0).abs() < 1.0, "got {}", tracker.y_velocity());
        assert_eq!(tracker.x_velocity(), 0.0);

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.y_velocity(), 0.0);
    }
}
