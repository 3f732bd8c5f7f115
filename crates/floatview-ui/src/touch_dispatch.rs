//! Routing of a gesture between the widget and the child it hosts.
//!
//! Mirrors the usual ancestor/child contract: the child gets first pick of a
//! gesture by accepting its `Down`, the widget may take the stream away by
//! intercepting, and the child then sees a `Cancel`.

use floatview_foundation::{MotionEvent, PointerAction};

use crate::drag_controller::DragGestureController;
use crate::translation::TranslationTarget;

/// Interactive content hosted inside the floating widget.
pub trait TouchChild {
    /// Returns `true` when the child wants the rest of the gesture.
    fn dispatch_touch_event(&mut self, event: &MotionEvent) -> bool;
}

impl<F> TouchChild for F
where
    F: FnMut(&MotionEvent) -> bool,
{
    fn dispatch_touch_event(&mut self, event: &MotionEvent) -> bool {
        self(event)
    }
}

/// Remembers who owns the gesture in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchDispatcher {
    child_is_target: bool,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the hosted child receives the stream.
    pub fn child_is_target(&self) -> bool {
        self.child_is_target
    }

    /// Delivers one widget-local event. Returns whether anyone consumed it.
    pub fn dispatch<T: TranslationTarget>(
        &mut self,
        controller: &mut DragGestureController<T>,
        child: Option<&mut dyn TouchChild>,
        event: &MotionEvent,
    ) -> bool {
        if event.action() == PointerAction::Down {
            self.child_is_target = false;
            let intercepted = controller.on_intercept_touch_event(event);
            if !intercepted {
                if let Some(child) = child {
                    if child.dispatch_touch_event(event) {
                        self.child_is_target = true;
                        return true;
                    }
                }
            }
            return controller.on_touch_event(event);
        }

        if !self.child_is_target {
            return controller.on_touch_event(event);
        }

        let Some(child) = child else {
            log::warn!("child target vanished mid-gesture, handing stream to the widget");
            self.child_is_target = false;
            return controller.on_touch_event(event);
        };

        if controller.on_intercept_touch_event(event) {
            log::debug!("widget intercepted, cancelling child");
            child.dispatch_touch_event(&event.with_action(PointerAction::Cancel));
            self.child_is_target = false;
            if event.action().ends_gesture() {
                return controller.on_touch_event(event);
            }
            return true;
        }

        let handled = child.dispatch_touch_event(event);
        if event.action().ends_gesture() {
            self.child_is_target = false;
            controller.abandon_gesture();
        }
        handled
    }
}
