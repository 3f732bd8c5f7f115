//! Core runtime for Floatview.
//!
//! Everything here runs on the host's UI thread. The runtime only owns the
//! queue of frame callbacks that animations register; the host drains it once
//! per display frame.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
