//! Assertion utilities for gesture tests

use floatview_ui::{AnimationCommand, DragGestureController, TranslationTarget};
use floatview_ui_graphics::Rect;

/// Assert that a value is within an expected range.
///
/// Velocity estimates and eased positions are floating point, so exact
/// comparisons are rarely what a test wants.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the controller's most recent command animates to `target_y`.
pub fn assert_last_command<T: TranslationTarget>(
    controller: &DragGestureController<T>,
    target_y: f32,
    duration_ms: u64,
) {
    assert_eq!(
        controller.last_command(),
        Some(AnimationCommand::new(target_y, duration_ms)),
        "last animation command"
    );
}

/// Assert that the controller has not issued any animation yet.
pub fn assert_no_command<T: TranslationTarget>(controller: &DragGestureController<T>) {
    assert_eq!(
        controller.issued_commands(),
        0,
        "expected no animation, last was {:?}",
        controller.last_command()
    );
}
