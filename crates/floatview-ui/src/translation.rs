//! The widget's vertical translation and how it is animated.

use floatview_animation::{Animatable, AnimationSpec};

/// An animate-to request issued when a gesture ends or on reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationCommand {
    pub target_y: f32,
    pub duration_ms: u64,
}

impl AnimationCommand {
    pub fn new(target_y: f32, duration_ms: u64) -> Self {
        Self {
            target_y,
            duration_ms,
        }
    }
}

/// Holder of the widget's vertical translation, read by the renderer every frame.
///
/// Implementations keep at most one transition active. Both
/// [`set_translation_y`](Self::set_translation_y) and
/// [`animate_translation_y`](Self::animate_translation_y) preempt whatever
/// transition is in flight; the controller never waits for one to finish.
pub trait TranslationTarget {
    fn translation_y(&self) -> f32;

    /// Applies a live drag offset immediately.
    fn set_translation_y(&mut self, value: f32);

    /// Starts a transition from the current translation to `target`.
    fn animate_translation_y(&mut self, target: f32, spec: AnimationSpec);
}

impl TranslationTarget for Animatable<f32> {
    fn translation_y(&self) -> f32 {
        self.value()
    }

    fn set_translation_y(&mut self, value: f32) {
        self.snap_to(value);
    }

    fn animate_translation_y(&mut self, target: f32, spec: AnimationSpec) {
        self.animate_to(target, spec);
    }
}
