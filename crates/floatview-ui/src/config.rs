//! Construction-time configuration for the floating widget.

use floatview_animation::{AnimationSpec, Easing};
use floatview_foundation::ViewConfiguration;
use floatview_ui_graphics::Dp;

/// How far past its anchor the widget may be dragged.
pub const DEFAULT_DRAG_SLACK: Dp = Dp(50.0);

/// Duration of both the fly-off and the reset transitions.
pub const SETTLE_DURATION_MS: u64 = 200;

/// Settings read once when the widget is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingConfig {
    /// Extra drag distance allowed beyond the anchor, in dp.
    pub drag_slack: Dp,
    /// Transition used for fly-off and reset.
    pub animation: AnimationSpec,
    /// Display density (physical pixels per dp).
    pub density: f32,
}

impl FloatingConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_drag_slack(mut self, drag_slack: Dp) -> Self {
        self.drag_slack = drag_slack;
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    pub fn drag_slack_px(&self) -> f32 {
        self.drag_slack.to_px(self.density)
    }

    /// Platform gesture constants for this config's density.
    pub fn view_configuration(&self) -> ViewConfiguration {
        ViewConfiguration::new(self.density)
    }
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            drag_slack: DEFAULT_DRAG_SLACK,
            animation: AnimationSpec::tween(SETTLE_DURATION_MS, Easing::AccelerateDecelerate),
            density: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_behaviour() {
        let config = FloatingConfig::default();
        assert_eq!(config.drag_slack_px(), 50.0);
        assert_eq!(config.animation.duration_millis, 200);
        assert_eq!(config.animation.easing, Easing::AccelerateDecelerate);
    }

    #[test]
    fn density_scales_slack_and_platform_constants() {
        let config = FloatingConfig::default().with_density(3.0);
        assert_eq!(config.drag_slack_px(), 150.0);
        assert_eq!(config.view_configuration().touch_slop, 24.0);
    }
}
