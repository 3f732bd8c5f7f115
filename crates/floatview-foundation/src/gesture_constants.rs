//! Baseline gesture thresholds in density-independent pixels.
//!
//! [`ViewConfiguration`](crate::ViewConfiguration) scales these by the display
//! density once, when the widget is constructed.

/// Distance a pointer may travel before a press becomes a drag.
///
/// Matches the common platform convention of 8dp.
pub const TOUCH_SLOP_DP: f32 = 8.0;

/// Release speed, in dp per second, below which a gesture is a plain drop.
pub const MIN_FLING_VELOCITY_DP: f32 = 50.0;

/// Upper bound on tracked release speed, in dp per second.
pub const MAX_FLING_VELOCITY_DP: f32 = 8_000.0;

/// Window for [`VelocityTracker::compute_current_velocity`](crate::VelocityTracker::compute_current_velocity)
/// that yields pixels per second.
pub const VELOCITY_UNITS_PER_SECOND: u32 = 1_000;
