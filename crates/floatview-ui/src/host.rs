//! Placing the widget inside a host container.

use std::fmt;

use floatview_foundation::{MotionEvent, PointerAction};
use floatview_ui_graphics::{Point, Rect, Size};

use crate::config::FloatingConfig;
use crate::drag_controller::DragGestureController;
use crate::geometry::anchor_origin;
use crate::touch_dispatch::{TouchChild, TouchDispatcher};
use crate::translation::{AnimationCommand, TranslationTarget};

#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host has no content container to attach to.
    ContainerMissing,
    /// The container exists but has not been measured yet.
    ContainerUnmeasured(Size),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::ContainerMissing => write!(f, "host has no content container"),
            HostError::ContainerUnmeasured(size) => write!(
                f,
                "content container is not measured ({}x{})",
                size.width, size.height
            ),
        }
    }
}

impl std::error::Error for HostError {}

/// Something that can host a floating widget.
pub trait FloatingHost {
    /// Size of the container the widget is laid out in.
    fn content_container(&self) -> Result<Size, HostError>;
}

impl FloatingHost for Size {
    fn content_container(&self) -> Result<Size, HostError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(*self)
        } else {
            Err(HostError::ContainerUnmeasured(*self))
        }
    }
}

/// A widget placed in a container, taking container-space input.
pub struct FloatingWindow<T: TranslationTarget> {
    container: Size,
    origin: Point,
    controller: DragGestureController<T>,
    dispatcher: TouchDispatcher,
    receiving: bool,
}

impl<T: TranslationTarget> FloatingWindow<T> {
    pub fn new(container: Size, controller: DragGestureController<T>) -> Self {
        let origin = anchor_origin(container, controller.geometry().size());
        Self {
            container,
            origin,
            controller,
            dispatcher: TouchDispatcher::new(),
            receiving: false,
        }
    }

    /// Anchor position of the widget, before translation.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Where the widget currently sits, translation included.
    pub fn bounds_in_container(&self) -> Rect {
        Rect::from_origin_size(
            self.origin.translate(0.0, self.controller.offset_y()),
            self.controller.geometry().size(),
        )
    }

    /// Re-anchors after the container or the content changed size.
    pub fn relayout(&mut self, container: Size, content: Size) {
        self.container = container;
        self.controller.set_content_size(content);
        self.origin = anchor_origin(container, content);
    }

    /// Routes a container-space event into the widget.
    ///
    /// A gesture whose first contact lands outside the widget is not delivered.
    pub fn dispatch_container_event(
        &mut self,
        event: &MotionEvent,
        child: Option<&mut dyn TouchChild>,
    ) -> bool {
        let bounds = self.bounds_in_container();
        if event.action() == PointerAction::Down {
            self.receiving = event
                .action_pointer()
                .is_some_and(|pointer| bounds.contains(pointer.position.x, pointer.position.y));
        }
        if !self.receiving {
            return false;
        }
        let origin = bounds.origin();
        let local = event.offset_location(-origin.x, -origin.y);
        let handled = self.dispatcher.dispatch(&mut self.controller, child, &local);
        if event.action().ends_gesture() {
            self.receiving = false;
        }
        handled
    }

    pub fn reset(&mut self) -> AnimationCommand {
        self.controller.reset()
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
}

/// Builds a widget inside `host`'s container.
///
/// A host that cannot provide its container yields `None` and an error log.
pub fn attach<H, T>(
    host: &H,
    config: FloatingConfig,
    content: Size,
    target: T,
) -> Option<FloatingWindow<T>>
where
    H: FloatingHost + ?Sized,
    T: TranslationTarget,
{
    match host.content_container() {
        Ok(container) => {
            let controller = DragGestureController::new(config, content, target);
            let window = FloatingWindow::new(container, controller);
            log::info!("floating widget attached at {:?}", window.origin());
            Some(window)
        }
        Err(err) => {
            log::error!("cannot attach floating widget: {err}");
            None
        }
    }
}
