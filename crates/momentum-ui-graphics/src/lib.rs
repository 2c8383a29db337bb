//! Pure math/data for offsets and extents in Momentum
//!
//! This crate contains the coordinate and extent value types shared by the
//! animation and gesture crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
