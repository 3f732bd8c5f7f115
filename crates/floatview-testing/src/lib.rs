//! Testing utilities and harness for Floatview

pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use recording::{AnimationRequest, RecordingTranslation};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::recording::{AnimationRequest, RecordingTranslation};
    pub use crate::robot::GestureRobot;
    pub use crate::robot_assertions;
}
