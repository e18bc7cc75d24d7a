//! Elevation-map pathfinding.
//!
//! Decodes marker-annotated ASCII height maps ([`HeightMap`]) and answers
//! shortest-climb queries against them:
//!
//! - [`distance_from_start`] — fewest steps from the `S` marker to the summit
//! - [`distance_from_lowest`] — fewest steps to the summit from *any*
//!   minimum-elevation cell, found in a single multi-source pass
//!
//! A step may ascend at most one unit of elevation but descend any amount;
//! [`ClimbPather`] expresses that rule for the generic search engine in
//! `ridge-paths`.

pub mod climb;
pub mod heightmap;

pub use climb::{ClimbPather, distance_from_lowest, distance_from_start, path_from_start};
pub use heightmap::{HeightMap, MAX_HEIGHT, MIN_HEIGHT, MapError};
