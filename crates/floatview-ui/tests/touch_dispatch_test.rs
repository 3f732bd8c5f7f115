use std::cell::RefCell;
use std::rc::Rc;

use floatview_foundation::{MotionEvent, PointerAction};
use floatview_testing::robot_assertions::{assert_last_command, assert_no_command};
use floatview_testing::{GestureRobot, RecordingTranslation};
use floatview_ui::{DragGestureController, FloatingConfig, Size};

type ActionLog = Rc<RefCell<Vec<PointerAction>>>;

fn recording_child(accepts: bool) -> (ActionLog, impl FnMut(&MotionEvent) -> bool) {
    let log: ActionLog = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let child = move |event: &MotionEvent| {
        sink.borrow_mut().push(event.action());
        accepts
    };
    (log, child)
}

fn robot_with_child(accepts: bool) -> (ActionLog, GestureRobot<RecordingTranslation>) {
    let (log, child) = recording_child(accepts);
    let controller = DragGestureController::new(
        FloatingConfig::default().with_density(2.0),
        Size::new(120.0, 100.0),
        RecordingTranslation::new(),
    );
    (log, GestureRobot::new(controller).with_child(child))
}

#[test]
fn child_keeps_a_gesture_that_stays_within_slop() {
    let (log, mut robot) = robot_with_child(true);

    robot.down(1, 40.0, 50.0);
    assert!(robot.dispatcher().child_is_target());
    robot.advance(16);
    robot.move_to(1, 50.0, 80.0);
    robot.advance(16);
    robot.up();

    assert_eq!(
        *log.borrow(),
        vec![PointerAction::Down, PointerAction::Move, PointerAction::Up]
    );
    assert_eq!(robot.controller().offset_y(), 0.0);
    assert!(!robot.controller().is_tracking());
    assert!(!robot.dispatcher().child_is_target());
    assert_no_command(robot.controller());
}

#[test]
fn interception_cancels_child_and_drives_the_widget() {
    let (log, mut robot) = robot_with_child(true);

    robot.down(1, 40.0, 50.0);
    robot.advance(16);
    assert!(robot.move_to(1, 60.0, 50.0));
    assert!(robot.controller().is_claimed());
    assert!(!robot.dispatcher().child_is_target());
    // The claiming move itself is not applied.
    assert_eq!(robot.controller().offset_y(), 0.0);

    robot.drag_by(1, 0.0, -45.0, 3, 10);
    assert_eq!(robot.controller().offset_y(), -45.0);
    robot.up();

    assert_eq!(*log.borrow(), vec![PointerAction::Down, PointerAction::Cancel]);
    assert_last_command(robot.controller(), -100.0, 200);
}

#[test]
fn declined_down_goes_straight_to_the_widget() {
    let (log, mut robot) = robot_with_child(false);

    robot.down(1, 40.0, 50.0);
    assert!(!robot.dispatcher().child_is_target());
    robot.advance(16);
    robot.move_to(1, 40.0, 70.0);

    assert_eq!(robot.controller().offset_y(), 20.0);
    assert_eq!(*log.borrow(), vec![PointerAction::Down]);
}

#[test]
fn deferred_reset_survives_a_child_owned_gesture() {
    let (_log, mut robot) = robot_with_child(true);

    robot.down(1, 40.0, 50.0);
    robot.controller_mut().reset();
    assert!(robot.controller().has_pending_reset());

    robot.advance(16);
    robot.up();

    assert_last_command(robot.controller(), 0.0, 200);
    assert!(!robot.controller().has_pending_reset());
}
