//! Pure geometry data and units for Floatview
//!
//! Positions, sizes and density-independent units shared by the input,
//! animation and widget crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}
