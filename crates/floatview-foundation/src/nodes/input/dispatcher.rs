//! Pointer event queue for hosts that batch input between frames.
//!
//! Platform integrations push raw events as they arrive and drain them into
//! the widget once per frame, in arrival order.

use crate::nodes::input::types::MotionEvent;
use std::cell::RefCell;

#[derive(Default)]
pub struct PointerEventQueue {
    queue: RefCell<Vec<MotionEvent>>,
}

impl PointerEventQueue {
    pub fn new() -> Self {
        Self {
            queue: RefCell::new(Vec::new()),
        }
    }

    pub fn push_event(&self, event: MotionEvent) {
        self.queue.borrow_mut().push(event);
    }

    /// Hands every queued event to `handler`. Events pushed by the handler
    /// itself are kept for the next drain.
    pub fn drain<F>(&self, mut handler: F)
    where
        F: FnMut(MotionEvent),
    {
        let events: Vec<MotionEvent> = self.queue.borrow_mut().drain(..).collect();
        for event in events {
            handler(event);
        }
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }
}
