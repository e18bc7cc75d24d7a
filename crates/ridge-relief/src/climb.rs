//! The climbing rule and the standard summit queries.

use ridge_core::Point;
use ridge_paths::{PathRange, Pather, WeightedPather};

use crate::heightmap::HeightMap;

/// Pathfinding adapter for a [`HeightMap`].
///
/// A step from `u` to an adjacent `v` is legal when
/// `height(v) <= height(u) + 1`: climb at most one unit, descend freely.
/// Every legal step costs 1.
pub struct ClimbPather<'a> {
    map: &'a HeightMap,
}

impl<'a> ClimbPather<'a> {
    /// Borrow a map for pathfinding.
    pub fn new(map: &'a HeightMap) -> Self {
        Self { map }
    }
}

impl Pather for ClimbPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(h) = self.map.height_at(p) else {
            return;
        };
        for np in p.neighbors_4() {
            if let Some(nh) = self.map.height_at(np) {
                if nh <= h + 1 {
                    buf.push(np);
                }
            }
        }
    }
}

impl WeightedPather for ClimbPather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

/// Fewest steps from the `S` marker to the summit.
///
/// `None` means the summit cannot be reached under the climbing rule.
pub fn distance_from_start(map: &HeightMap, pr: &mut PathRange) -> Option<i32> {
    pr.set_range(map.bounds());
    pr.dijkstra_to(&ClimbPather::new(map), &[map.start()], map.summit())
}

/// Fewest steps to the summit from any minimum-elevation cell.
///
/// Every lowest cell is seeded at distance 0 in a single multi-source pass,
/// so the result is the best over all candidate trailheads. Always at most
/// [`distance_from_start`], since the start cell is one of the candidates.
pub fn distance_from_lowest(map: &HeightMap, pr: &mut PathRange) -> Option<i32> {
    pr.set_range(map.bounds());
    let sources = map.lowest_points();
    pr.dijkstra_to(&ClimbPather::new(map), &sources, map.summit())
}

/// The cells of a shortest start-to-summit walk, start first.
///
/// `None` when the summit is unreachable from the start.
pub fn path_from_start(map: &HeightMap, pr: &mut PathRange) -> Option<Vec<Point>> {
    distance_from_start(map, pr)?;
    pr.path_to(map.summit())
}
