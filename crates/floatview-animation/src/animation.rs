//! Time-based animations with easing curves.

use std::cell::RefCell;
use std::rc::Rc;

use floatview_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cosine curve: starts and ends slowly, fastest in the middle.
    /// Default for widget property animations.
    AccelerateDecelerate,
}

impl Easing {
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::AccelerateDecelerate => {
                ((fraction + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
        }
    }
}

/// Tween specification: duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::AccelerateDecelerate)
    }
}

type ValueListener<T> = Rc<dyn Fn(&T)>;

/// A value that can be animated toward a target on the frame clock.
///
/// At most one transition is active at a time: [`animate_to`](Self::animate_to)
/// and [`snap_to`](Self::snap_to) both cancel whatever transition is in flight,
/// and a new `animate_to` starts from the value reached so far.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_value_change: Option<ValueListener<T>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            clock: runtime.frame_clock(),
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            on_value_change: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animates from the current value to `target`, replacing any running transition.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jumps to `target` immediately, cancelling any running transition.
    pub fn snap_to(&mut self, target: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.current = target.clone();
            inner.start = target.clone();
            inner.target = target;
            inner.start_time_nanos = None;
        }
        Self::notify(&self.inner);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Called with every new value, from frames and from `snap_to`.
    pub fn set_on_value_change(&mut self, listener: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().on_value_change = Some(Rc::new(listener));
    }

    fn notify(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (listener, value) = {
            let inner = this.borrow();
            (inner.on_value_change.clone(), inner.current.clone())
        };
        if let Some(listener) = listener {
            listener(&value);
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });

        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            log::debug!("no frame clock available, finishing animation immediately");
            {
                let mut inner = this.borrow_mut();
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
            }
            Self::notify(this);
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
            let linear_progress =
                (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

            if linear_progress >= 1.0 {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
            } else {
                let progress = spec.easing.transform(linear_progress);
                inner.current = inner.start.lerp(&inner.target, progress);
                schedule_next = true;
            }
        }

        Self::notify(this);
        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
