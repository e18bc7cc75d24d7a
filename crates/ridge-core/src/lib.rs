//! **ridge-core** — geometry primitives for the *ridge* pathfinding toolkit.
//!
//! Provides [`Point`], a value-semantic 2D integer coordinate, and [`Range`],
//! a half-open rectangle with row-major iteration. These are the coordinate
//! and bounds types shared by every crate in the workspace.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
