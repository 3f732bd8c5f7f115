pub mod dispatcher;
pub mod types;

pub use dispatcher::PointerEventQueue;
pub use types::{MotionEvent, PointerAction, PointerId, PointerSample};

pub mod prelude {
    pub use super::dispatcher::PointerEventQueue;
    pub use super::types::{MotionEvent, PointerAction, PointerId, PointerSample};
}
