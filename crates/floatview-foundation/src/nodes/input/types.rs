use floatview_ui_graphics::Point;
use smallvec::SmallVec;

/// Identifier of one pointer contact, stable from its down to its up.
pub type PointerId = u64;

/// What happened to the pointer set in a [`MotionEvent`].
///
/// `Down` and `Up` bracket the whole gesture (first contact, last contact);
/// `PointerDown`/`PointerUp` are additional contacts joining or leaving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    Down,
    PointerDown,
    Move,
    PointerUp,
    Up,
    Cancel,
}

impl PointerAction {
    /// True for the actions after which no pointer of the gesture is down.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, PointerAction::Up | PointerAction::Cancel)
    }
}

/// One pointer's position inside a [`MotionEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
}

impl PointerSample {
    pub fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// A touch event carrying every pointer that is down at `uptime_ms`.
///
/// Positions are local to the widget receiving the event: a host that moves
/// the widget (for example by translating it) reports positions relative to the
/// moved bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionEvent {
    action: PointerAction,
    action_index: usize,
    uptime_ms: u64,
    pointers: SmallVec<[PointerSample; 4]>,
}

impl MotionEvent {
    /// Creates an event; `action_index` names the pointer that changed for
    /// `Down`/`PointerDown`/`PointerUp`/`Up` and is ignored otherwise.
    pub fn new(
        action: PointerAction,
        action_index: usize,
        uptime_ms: u64,
        pointers: impl IntoIterator<Item = PointerSample>,
    ) -> Self {
        Self {
            action,
            action_index,
            uptime_ms,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Single-pointer event.
    pub fn single(action: PointerAction, id: PointerId, position: Point, uptime_ms: u64) -> Self {
        Self::new(action, 0, uptime_ms, [PointerSample::new(id, position)])
    }

    pub fn action(&self) -> PointerAction {
        self.action
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    pub fn uptime_ms(&self) -> u64 {
        self.uptime_ms
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointers(&self) -> &[PointerSample] {
        &self.pointers
    }

    pub fn pointer(&self, index: usize) -> Option<&PointerSample> {
        self.pointers.get(index)
    }

    /// The pointer named by `action_index`.
    pub fn action_pointer(&self) -> Option<&PointerSample> {
        self.pointer(self.action_index)
    }

    /// Index of `id` within this event, or `None` if that pointer is not part of it.
    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|pointer| pointer.id == id)
    }

    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.find_pointer_index(id)
            .and_then(|index| self.pointer(index))
            .map(|pointer| pointer.position)
    }

    /// Same pointers and time, different action. Used when routing converts an
    /// event into a `Cancel` for a child that loses the gesture.
    pub fn with_action(&self, action: PointerAction) -> Self {
        Self {
            action,
            action_index: self.action_index,
            uptime_ms: self.uptime_ms,
            pointers: self.pointers.clone(),
        }
    }

    /// Shifts every pointer position, e.g. to move from container to widget space.
    pub fn offset_location(&self, dx: f32, dy: f32) -> Self {
        Self {
            action: self.action,
            action_index: self.action_index,
            uptime_ms: self.uptime_ms,
            pointers: self
                .pointers
                .iter()
                .map(|pointer| PointerSample::new(pointer.id, pointer.position.translate(dx, dy)))
                .collect(),
        }
    }
}
