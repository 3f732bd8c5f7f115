//! Animation system for Floatview
//!
//! Time-based tweens with easing curves, driven by the core frame clock.

pub mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, Easing, Lerp};
}
