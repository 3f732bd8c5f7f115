//! Foundation elements for Floatview: pointer input, velocity tracking and
//! platform gesture configuration.

pub mod gesture_constants;
pub mod nodes;
pub mod time;
pub mod velocity_tracker;
pub mod view_configuration;

pub use nodes::input::{
    MotionEvent, PointerAction, PointerEventQueue, PointerId, PointerSample,
};
pub use time::uptime_millis;
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};
pub use view_configuration::ViewConfiguration;

pub mod prelude {
    pub use crate::nodes::input::prelude::*;
    pub use crate::velocity_tracker::{VelocityTracker, VelocityTracker1D};
    pub use crate::view_configuration::ViewConfiguration;
}
