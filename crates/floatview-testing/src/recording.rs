//! A translation target that records instead of animating.

use floatview_animation::AnimationSpec;
use floatview_ui::TranslationTarget;

/// One `animate_translation_y` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub target: f32,
    pub spec: AnimationSpec,
}

/// Records every translation change so tests can assert on them.
///
/// Animations do not progress on their own: the value stays where it was
/// until [`settle`](Self::settle) jumps to the running target. A live
/// `set_translation_y` drops the running animation, like a real target would.
#[derive(Clone, Debug, Default)]
pub struct RecordingTranslation {
    value: f32,
    live_updates: Vec<f32>,
    animations: Vec<AnimationRequest>,
    running: Option<AnimationRequest>,
}

impl RecordingTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(value: f32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Every live offset applied during drags, oldest first.
    pub fn live_updates(&self) -> &[f32] {
        &self.live_updates
    }

    pub fn animations(&self) -> &[AnimationRequest] {
        &self.animations
    }

    pub fn last_animation(&self) -> Option<AnimationRequest> {
        self.animations.last().copied()
    }

    pub fn running(&self) -> Option<AnimationRequest> {
        self.running
    }

    /// Finishes the running animation, if any.
    pub fn settle(&mut self) {
        if let Some(request) = self.running.take() {
            self.value = request.target;
        }
    }
}

impl TranslationTarget for RecordingTranslation {
    fn translation_y(&self) -> f32 {
        self.value
    }

    fn set_translation_y(&mut self, value: f32) {
        self.running = None;
        self.value = value;
        self.live_updates.push(value);
    }

    fn animate_translation_y(&mut self, target: f32, spec: AnimationSpec) {
        let request = AnimationRequest { target, spec };
        self.running = Some(request);
        self.animations.push(request);
    }
}
