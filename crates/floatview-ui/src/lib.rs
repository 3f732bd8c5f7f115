//! Floating overlay widget for Floatview.
//!
//! A small panel anchored to the top-end corner of its container that the
//! user drags vertically. On release it either flies off above the container
//! or stays where it was dropped; [`DragGestureController::reset`] brings it
//! back to the anchor.
//!
//! The host owns rendering and input delivery. It feeds [`MotionEvent`]s
//! through a [`TouchDispatcher`] (or straight into the controller) and reads
//! the widget's vertical translation from its [`TranslationTarget`] each frame.
//!
//! [`MotionEvent`]: floatview_foundation::MotionEvent

mod config;
mod drag_controller;
mod geometry;
mod gesture_state;
mod host;
mod touch_dispatch;
mod translation;

pub use config::{FloatingConfig, DEFAULT_DRAG_SLACK, SETTLE_DURATION_MS};
pub use drag_controller::DragGestureController;
pub use geometry::{anchor_origin, WidgetGeometry};
pub use gesture_state::{GestureSession, GestureState};
pub use host::{attach, FloatingHost, FloatingWindow, HostError};
pub use touch_dispatch::{TouchChild, TouchDispatcher};
pub use translation::{AnimationCommand, TranslationTarget};

pub use floatview_foundation::{MotionEvent, PointerAction, PointerId, PointerSample};
pub use floatview_ui_graphics::{Dp, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::FloatingConfig;
    pub use crate::drag_controller::DragGestureController;
    pub use crate::host::{attach, FloatingHost, FloatingWindow};
    pub use crate::touch_dispatch::{TouchChild, TouchDispatcher};
    pub use crate::translation::{AnimationCommand, TranslationTarget};
    pub use floatview_foundation::prelude::*;
}
