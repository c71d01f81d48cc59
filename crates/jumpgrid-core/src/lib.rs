//! **jumpgrid-core**: core types for grid path planning.
//!
//! This crate provides the geometry primitives shared by the *jumpgrid*
//! crates and the walkability matrix the path grid is built from.

pub mod geom;
pub mod mask;

pub use geom::{Point, Range, RangeIter};
pub use mask::{MaskError, WalkMask};
