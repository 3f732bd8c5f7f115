//! Platform gesture constants resolved against a display density.

use crate::gesture_constants::{MAX_FLING_VELOCITY_DP, MIN_FLING_VELOCITY_DP, TOUCH_SLOP_DP};
use floatview_ui_graphics::Dp;

/// Touch slop and fling limits in physical pixels.
///
/// Read once when a widget is built; the values never change afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: f32,
    pub minimum_fling_velocity: f32,
    pub maximum_fling_velocity: f32,
}

impl ViewConfiguration {
    pub fn new(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("invalid display density {density}, falling back to 1.0");
            1.0
        };
        Self {
            touch_slop: Dp(TOUCH_SLOP_DP).to_px(density),
            minimum_fling_velocity: Dp(MIN_FLING_VELOCITY_DP).to_px(density),
            maximum_fling_velocity: Dp(MAX_FLING_VELOCITY_DP).to_px(density),
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_fling_velocities(mut self, minimum: f32, maximum: f32) -> Self {
        self.minimum_fling_velocity = minimum;
        self.maximum_fling_velocity = maximum;
        self
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::new(1.0)
    }
}
