//! Scripted gestures against a floating widget.
//!
//! The robot plays the part of the platform: it keeps the set of pointers that
//! are down, stamps each event with a clock it advances by hand, converts
//! screen positions to widget-local ones using the widget's current offset and
//! routes the result through a [`TouchDispatcher`].
//!
//! # Example
//!
//! ```
//! use floatview_testing::{GestureRobot, RecordingTranslation};
//! use floatview_ui::{DragGestureController, FloatingConfig, Size};
//!
//! let controller = DragGestureController::new(
//!     FloatingConfig::default().with_density(2.0),
//!     Size::new(120.0, 100.0),
//!     RecordingTranslation::new(),
//! );
//! let mut robot = GestureRobot::new(controller);
//!
//! robot.down(1, 10.0, 500.0);
//! robot.advance(16);
//! robot.move_to(1, 10.0, 560.0);
//! assert_eq!(robot.controller().offset_y(), 60.0);
//! ```

use floatview_foundation::{MotionEvent, PointerAction, PointerId, PointerSample};
use floatview_ui::{DragGestureController, TouchChild, TouchDispatcher, TranslationTarget};
use floatview_ui_graphics::Point;
use smallvec::SmallVec;

/// Drives a [`DragGestureController`] with screen-space pointer scripts.
pub struct GestureRobot<T: TranslationTarget> {
    controller: DragGestureController<T>,
    dispatcher: TouchDispatcher,
    child: Option<Box<dyn TouchChild>>,
    pointers: SmallVec<[PointerSample; 4]>,
    now_ms: u64,
}

impl<T: TranslationTarget> GestureRobot<T> {
    pub fn new(controller: DragGestureController<T>) -> Self {
        Self {
            controller,
            dispatcher: TouchDispatcher::new(),
            child: None,
            pointers: SmallVec::new(),
            now_ms: 0,
        }
    }

    /// Hosts `child` inside the widget so it competes for gestures.
    pub fn with_child(mut self, child: impl TouchChild + 'static) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    pub fn controller(&self) -> &DragGestureController<T> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragGestureController<T> {
        &mut self.controller
    }

    pub fn dispatcher(&self) -> &TouchDispatcher {
        &self.dispatcher
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the event clock forward.
    pub fn advance(&mut self, millis: u64) {
        self.now_ms += millis;
    }

    /// First contact of a gesture. Any pointers left over are forgotten.
    pub fn down(&mut self, id: PointerId, x: f32, y: f32) -> bool {
        self.pointers.clear();
        self.pointers.push(PointerSample::new(id, Point::new(x, y)));
        self.send(PointerAction::Down, 0)
    }

    /// An additional contact joining the gesture.
    pub fn pointer_down(&mut self, id: PointerId, x: f32, y: f32) -> bool {
        self.pointers.push(PointerSample::new(id, Point::new(x, y)));
        let index = self.pointers.len() - 1;
        self.send(PointerAction::PointerDown, index)
    }

    /// Moves one pointer; the others stay where they are.
    pub fn move_to(&mut self, id: PointerId, x: f32, y: f32) -> bool {
        if let Some(pointer) = self.pointers.iter_mut().find(|pointer| pointer.id == id) {
            pointer.position = Point::new(x, y);
        }
        self.send(PointerAction::Move, 0)
    }

    /// Moves `id` in `steps` equal increments, `step_ms` apart.
    pub fn drag_by(&mut self, id: PointerId, dx: f32, dy: f32, steps: u32, step_ms: u64) {
        let Some(start) = self.position_of(id) else {
            return;
        };
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.advance(step_ms);
            self.move_to(id, start.x + dx * fraction, start.y + dy * fraction);
        }
    }

    /// Lifts one of several pointers.
    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        let Some(index) = self.pointers.iter().position(|pointer| pointer.id == id) else {
            return false;
        };
        let handled = self.send(PointerAction::PointerUp, index);
        self.pointers.remove(index);
        handled
    }

    /// Lifts the last pointer, ending the gesture.
    pub fn up(&mut self) -> bool {
        let handled = self.send(PointerAction::Up, 0);
        self.pointers.clear();
        handled
    }

    pub fn cancel(&mut self) -> bool {
        let handled = self.send(PointerAction::Cancel, 0);
        self.pointers.clear();
        handled
    }

    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|pointer| pointer.id == id)
            .map(|pointer| pointer.position)
    }

    fn send(&mut self, action: PointerAction, action_index: usize) -> bool {
        let offset = self.controller.offset_y();
        let screen = MotionEvent::new(action, action_index, self.now_ms, self.pointers.iter().copied());
        let local = screen.offset_location(0.0, -offset);
        match self.child.as_mut() {
            Some(child) => self.dispatcher.dispatch(
                &mut self.controller,
                Some(&mut **child as &mut dyn TouchChild),
                &local,
            ),
            None => self.dispatcher.dispatch(&mut self.controller, None, &local),
        }
    }
}
