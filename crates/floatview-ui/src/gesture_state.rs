use floatview_foundation::gesture_constants::VELOCITY_UNITS_PER_SECOND;
use floatview_foundation::{PointerId, VelocityTracker};
use floatview_ui_graphics::Point;

/// The pointer currently driving a drag and what it has done so far.
#[derive(Clone, Debug)]
pub struct GestureSession {
    pointer_id: PointerId,
    down: Point,
    velocity: VelocityTracker,
}

impl GestureSession {
    pub(crate) fn new(pointer_id: PointerId, down: Point) -> Self {
        Self {
            pointer_id,
            down,
            velocity: VelocityTracker::new(),
        }
    }

    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    /// Where the driving pointer touched down, in widget-local coordinates.
    pub fn down(&self) -> Point {
        self.down
    }

    pub(crate) fn record(&mut self, time_ms: u64, container_position: Point) {
        self.velocity.add_position(time_ms, container_position);
    }

    /// Moves the session to another pointer. Its current position becomes the
    /// new down point so the next move continues from the current offset.
    pub(crate) fn hand_off(&mut self, pointer_id: PointerId, position: Point) {
        self.pointer_id = pointer_id;
        self.down = position;
        self.velocity.clear();
    }

    /// Consumes the session, yielding the vertical release velocity in px/s.
    pub(crate) fn release_velocity(mut self, max_velocity: f32) -> f32 {
        self.velocity
            .compute_current_velocity(VELOCITY_UNITS_PER_SECOND, max_velocity);
        self.velocity.y_velocity()
    }
}

/// Whether a pointer is driving the widget.
#[derive(Clone, Debug, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking(GestureSession),
}

impl GestureState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, GestureState::Tracking(_))
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match self {
            GestureState::Tracking(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    /// Leaves `Idle` in place and returns the session that was tracking, if any.
    pub(crate) fn take(&mut self) -> Option<GestureSession> {
        match std::mem::take(self) {
            GestureState::Tracking(session) => Some(session),
            GestureState::Idle => None,
        }
    }
}
