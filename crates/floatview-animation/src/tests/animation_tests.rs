use super::*;

use floatview_core::Runtime;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(runtime: &Runtime, start_nanos: u64, frames: usize) -> u64 {
    let handle = runtime.handle();
    let mut time = start_nanos;
    for _ in 0..frames {
        if !handle.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        handle.drain_frame_callbacks(time);
    }
    time
}

#[test]
fn tween_interpolates_over_time() {
    let runtime = Runtime::new();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    let samples = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&samples);
    animatable.set_on_value_change(move |value| sink.borrow_mut().push(*value));

    animatable.animate_to(-100.0, AnimationSpec::linear(200));
    assert!(animatable.is_running());
    assert_eq!(animatable.value(), 0.0, "nothing moves before the first frame");

    // First frame pins the start time.
    runtime.handle().drain_frame_callbacks(0);
    run_frames(&runtime, 0, 32);

    let samples = samples.borrow();
    assert!(
        samples.iter().any(|v| *v < 0.0 && *v > -100.0),
        "expected intermediate values, got {:?}",
        samples
    );
    assert!(
        samples.windows(2).all(|pair| pair[1] <= pair[0]),
        "values should move monotonically toward the target: {:?}",
        samples
    );
    assert_eq!(animatable.value(), -100.0);
    assert!(!animatable.is_running());
}

#[test]
fn tween_finishes_after_its_duration() {
    let runtime = Runtime::new();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(50.0, AnimationSpec::tween(200, Easing::AccelerateDecelerate));

    runtime.handle().drain_frame_callbacks(0);
    runtime.handle().drain_frame_callbacks(100_000_000);
    let midway = animatable.value();
    assert!((midway - 25.0).abs() < 0.01, "cosine curve is symmetric, got {midway}");

    runtime.handle().drain_frame_callbacks(200_000_000);
    assert_eq!(animatable.value(), 50.0);
    assert!(!runtime.handle().has_frame_callbacks());
}

#[test]
fn new_target_preempts_running_transition() {
    let runtime = Runtime::new();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(-100.0, AnimationSpec::linear(200));
    runtime.handle().drain_frame_callbacks(0);
    runtime.handle().drain_frame_callbacks(100_000_000);
    assert_eq!(animatable.value(), -50.0);

    animatable.animate_to(0.0, AnimationSpec::linear(200));
    assert_eq!(animatable.target(), 0.0);

    runtime.handle().drain_frame_callbacks(100_000_000);
    assert_eq!(animatable.value(), -50.0, "restarts from the value reached so far");
    runtime.handle().drain_frame_callbacks(200_000_000);
    assert_eq!(animatable.value(), -25.0);
    runtime.handle().drain_frame_callbacks(300_000_000);
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn snap_cancels_running_transition() {
    let runtime = Runtime::new();
    let mut animatable = Animatable::new(0.0f32, runtime.handle());
    animatable.animate_to(-100.0, AnimationSpec::linear(200));
    runtime.handle().drain_frame_callbacks(0);

    animatable.snap_to(30.0);
    assert!(!animatable.is_running());
    assert!(!runtime.handle().has_frame_callbacks());

    run_frames(&runtime, 0, 8);
    assert_eq!(animatable.value(), 30.0);
}

#[test]
fn missing_runtime_jumps_to_target() {
    let handle = Runtime::new().handle();
    let mut animatable = Animatable::new(0.0f32, handle);
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    animatable.set_on_value_change(move |_| counter.set(counter.get() + 1));

    animatable.animate_to(-80.0, AnimationSpec::default());

    assert_eq!(animatable.value(), -80.0);
    assert!(!animatable.is_running());
    assert_eq!(notified.get(), 1);
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
        assert!(easing.transform(0.0).abs() < 1e-5, "{easing:?} at 0");
        assert!((easing.transform(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
    }
    assert!(Easing::AccelerateDecelerate.transform(0.25) < 0.25);
    assert!(Easing::AccelerateDecelerate.transform(0.75) > 0.75);
}
