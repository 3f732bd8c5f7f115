//! Touch handling for the floating widget.
//!
//! The controller sees every event of a gesture twice over its lifetime:
//! first through [`DragGestureController::on_intercept_touch_event`] while a
//! child may still own the stream, then through
//! [`DragGestureController::on_touch_event`] once the widget has claimed it.
//! Event positions are widget-local, so they shift as the widget moves.

use floatview_foundation::{MotionEvent, PointerAction, PointerId, ViewConfiguration};
use floatview_ui_graphics::{Point, Size};

use crate::config::FloatingConfig;
use crate::geometry::WidgetGeometry;
use crate::gesture_state::{GestureSession, GestureState};
use crate::translation::{AnimationCommand, TranslationTarget};

/// Vertical drag, fling-to-dismiss and reset for one floating widget.
pub struct DragGestureController<T: TranslationTarget> {
    config: FloatingConfig,
    view_configuration: ViewConfiguration,
    geometry: WidgetGeometry,
    state: GestureState,
    claimed: bool,
    pending_reset: bool,
    target: T,
    last_command: Option<AnimationCommand>,
    issued_commands: usize,
    last_release_velocity: Option<f32>,
}

impl<T: TranslationTarget> DragGestureController<T> {
    pub fn new(config: FloatingConfig, content: Size, target: T) -> Self {
        let view_configuration = config.view_configuration();
        let geometry = WidgetGeometry::new(content, config.drag_slack_px());
        Self {
            config,
            view_configuration,
            geometry,
            state: GestureState::Idle,
            claimed: false,
            pending_reset: false,
            target,
            last_command: None,
            issued_commands: 0,
            last_release_velocity: None,
        }
    }

    /// Decides whether the widget takes the stream away from its child.
    ///
    /// Returns `true` from the move on which the driving pointer's horizontal
    /// travel reaches the touch slop, and for every event after it until the
    /// next `Down`.
    pub fn on_intercept_touch_event(&mut self, event: &MotionEvent) -> bool {
        match event.action() {
            PointerAction::Down => {
                self.begin_gesture(event);
                false
            }
            PointerAction::Move if !self.claimed => {
                let Some(session) = self.state.session() else {
                    return false;
                };
                let position = event
                    .position_of(session.pointer_id())
                    .or_else(|| event.pointer(0).map(|pointer| pointer.position));
                if let Some(position) = position {
                    let travel = (position.x - session.down().x).abs();
                    if travel >= self.view_configuration.touch_slop {
                        log::debug!(
                            "claiming gesture for pointer {} after {travel:.1}px",
                            session.pointer_id()
                        );
                        self.claimed = true;
                    }
                }
                self.claimed
            }
            _ => self.claimed,
        }
    }

    /// Handles an event the widget owns. Returns `true` when it was consumed.
    pub fn on_touch_event(&mut self, event: &MotionEvent) -> bool {
        match event.action() {
            PointerAction::Down => {
                if !self.state.is_tracking() {
                    self.begin_gesture(event);
                }
                true
            }
            PointerAction::PointerDown => self.adopt_pointer(event),
            PointerAction::Move => self.drag(event),
            PointerAction::PointerUp => self.pointer_up(event),
            PointerAction::Up | PointerAction::Cancel => {
                self.finish_gesture();
                true
            }
        }
    }

    /// Animates the widget back to its anchor.
    ///
    /// While a pointer is dragging, the command is held back and issued when
    /// that gesture ends, replacing the release animation.
    pub fn reset(&mut self) -> AnimationCommand {
        let command = self.command_to(0.0);
        if self.state.is_tracking() {
            log::debug!("reset deferred until the current gesture ends");
            self.pending_reset = true;
        } else {
            self.issue(command);
        }
        command
    }

    /// Drops the current session without settling.
    ///
    /// Used when a child kept the gesture to the end: the widget never moved,
    /// so there is nothing to decide. A deferred reset is still issued.
    pub fn abandon_gesture(&mut self) {
        if let Some(session) = self.state.take() {
            log::debug!("abandoning gesture of pointer {}", session.pointer_id());
        }
        self.flush_pending_reset();
    }

    pub fn offset_y(&self) -> f32 {
        self.target.translation_y()
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.state.session().map(GestureSession::pointer_id)
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn geometry(&self) -> &WidgetGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &FloatingConfig {
        &self.config
    }

    pub fn view_configuration(&self) -> &ViewConfiguration {
        &self.view_configuration
    }

    /// Updates the measured content size after a relayout.
    pub fn set_content_size(&mut self, size: Size) {
        self.geometry.set_size(size);
    }

    /// The most recent animate-to request, if any was issued.
    pub fn last_command(&self) -> Option<AnimationCommand> {
        self.last_command
    }

    pub fn issued_commands(&self) -> usize {
        self.issued_commands
    }

    /// Vertical velocity (px/s) measured at the last release.
    pub fn last_release_velocity(&self) -> Option<f32> {
        self.last_release_velocity
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn begin_gesture(&mut self, event: &MotionEvent) {
        if let Some(stale) = self.state.take() {
            log::debug!("discarding stale session of pointer {}", stale.pointer_id());
            self.flush_pending_reset();
        }
        self.claimed = false;
        if let Some(pointer) = event.action_pointer() {
            log::debug!("pointer {} down at {:?}", pointer.id, pointer.position);
            self.state = GestureState::Tracking(GestureSession::new(pointer.id, pointer.position));
        }
    }

    fn adopt_pointer(&mut self, event: &MotionEvent) -> bool {
        if self.state.is_tracking() {
            return true;
        }
        let Some(pointer) = event.action_pointer() else {
            return false;
        };
        let position = pointer.position;
        if !self.geometry.bounds().contains(position.x, position.y) {
            return false;
        }
        log::debug!("adopting pointer {} at {:?}", pointer.id, position);
        self.state = GestureState::Tracking(GestureSession::new(pointer.id, position));
        true
    }

    fn drag(&mut self, event: &MotionEvent) -> bool {
        let GestureState::Tracking(session) = &mut self.state else {
            return false;
        };
        let Some(position) = event.position_of(session.pointer_id()) else {
            return true;
        };
        let previous = self.target.translation_y();
        let offset = self
            .geometry
            .clamp_drag(previous + position.y - session.down().y);
        session.record(
            event.uptime_ms(),
            Point::new(position.x, position.y + previous),
        );
        log::trace!("drag offset {previous:.1} -> {offset:.1}");
        self.target.set_translation_y(offset);
        true
    }

    fn pointer_up(&mut self, event: &MotionEvent) -> bool {
        let Some(lifted) = event.action_pointer().map(|pointer| pointer.id) else {
            return false;
        };
        let bounds = self.geometry.bounds();
        let GestureState::Tracking(session) = &mut self.state else {
            return false;
        };
        if lifted != session.pointer_id() {
            return true;
        }
        let replacement = event
            .pointers()
            .iter()
            .find(|pointer| {
                pointer.id != lifted && bounds.contains(pointer.position.x, pointer.position.y)
            })
            .copied();
        match replacement {
            Some(next) => {
                log::debug!("handing drag from pointer {lifted} to {}", next.id);
                session.hand_off(next.id, next.position);
            }
            None => self.finish_gesture(),
        }
        true
    }

    fn finish_gesture(&mut self) {
        let velocity = self
            .state
            .take()
            .map(|session| session.release_velocity(self.view_configuration.maximum_fling_velocity));
        self.last_release_velocity = velocity;
        if self.flush_pending_reset() {
            return;
        }
        if let Some(command) = self.release_command(velocity) {
            self.issue(command);
        }
    }

    /// Picks where the widget settles after release, if anywhere.
    fn release_command(&self, velocity: Option<f32>) -> Option<AnimationCommand> {
        let content_height = self.geometry.content_height();
        let dismissed = self.command_to(self.geometry.dismissed_offset());
        if let Some(velocity) = velocity {
            if velocity.abs() > self.view_configuration.minimum_fling_velocity && velocity < 0.0 {
                log::debug!("upward fling at {velocity:.0}px/s dismisses");
                return Some(dismissed);
            }
        }
        let offset = self.target.translation_y();
        if offset <= -content_height / 2.0 {
            log::debug!("released past midpoint at {offset:.1}, dismissing");
            return Some(dismissed);
        }
        log::debug!("released at {offset:.1}, staying put");
        None
    }

    fn flush_pending_reset(&mut self) -> bool {
        if !std::mem::take(&mut self.pending_reset) {
            return false;
        }
        let command = self.command_to(0.0);
        self.issue(command);
        true
    }

    fn command_to(&self, target_y: f32) -> AnimationCommand {
        AnimationCommand::new(target_y, self.config.animation.duration_millis)
    }

    fn issue(&mut self, command: AnimationCommand) {
        log::debug!(
            "animating to {:.1} over {}ms",
            command.target_y,
            command.duration_ms
        );
        self.target
            .animate_translation_y(command.target_y, self.config.animation);
        self.last_command = Some(command);
        self.issued_commands += 1;
    }
}

impl<T: TranslationTarget + std::fmt::Debug> std::fmt::Debug for DragGestureController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragGestureController")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("claimed", &self.claimed)
            .field("pending_reset", &self.pending_reset)
            .field("target", &self.target)
            .finish()
    }
}
