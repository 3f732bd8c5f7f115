use crate::{FrameCallbackId, FrameClock};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.needs_frame.set(true);
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        // Callbacks registered from inside a callback run on the next frame.
        for callback in pending {
            callback(frame_time_nanos);
        }
        if !self.has_frame_callbacks() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame callback queue.
///
/// Dropping the runtime invalidates every [`RuntimeHandle`]; registrations made
/// through a dead handle are inactive.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        } else {
            log::warn!("drain_frame_callbacks on a dropped runtime");
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    /// True while at least one frame callback is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_runs_callbacks_once_with_frame_time() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        handle.register_frame_callback(move |time| sink.borrow_mut().push(time));
        assert!(handle.needs_frame());

        handle.drain_frame_callbacks(16);
        handle.drain_frame_callbacks(32);

        assert_eq!(seen.borrow().as_slice(), &[16]);
        assert!(!handle.needs_frame());
    }

    #[test]
    fn cancelled_callback_never_runs() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));

        let flag = Rc::clone(&fired);
        let id = handle
            .register_frame_callback(move |_| flag.set(true))
            .expect("runtime alive");
        handle.cancel_frame_callback(id);
        handle.drain_frame_callbacks(16);

        assert!(!fired.get());
        assert!(!handle.has_frame_callbacks());
    }

    #[test]
    fn callbacks_registered_during_drain_wait_for_next_frame() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let frames = Rc::new(RefCell::new(Vec::new()));

        let inner_handle = handle.clone();
        let sink = Rc::clone(&frames);
        handle.register_frame_callback(move |time| {
            sink.borrow_mut().push(time);
            let sink = Rc::clone(&sink);
            inner_handle.register_frame_callback(move |time| sink.borrow_mut().push(time));
        });

        handle.drain_frame_callbacks(1);
        assert_eq!(frames.borrow().as_slice(), &[1]);
        handle.drain_frame_callbacks(2);
        assert_eq!(frames.borrow().as_slice(), &[1, 2]);
    }

    #[test]
    fn dead_runtime_handle_is_inert() {
        let handle = Runtime::new().handle();
        assert!(!handle.is_alive());
        assert!(handle.register_frame_callback(|_| {}).is_none());
        assert!(!handle.needs_frame());
    }
}
