use std::collections::BinaryHeap;

use ridge_core::Point;

use crate::PathRange;
use crate::pathrange::{HeapEntry, PathNode, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute a multi-source Dijkstra distance map.
    ///
    /// Every source starts at distance 0; sources outside the range are
    /// ignored. Expansion stops when the cumulative cost exceeds `max_cost`.
    /// Returns all reached nodes in finalization order.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_cost: i32,
    ) -> &[PathNode] {
        // Reset the flat distance map.
        for v in self.dist_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.results.clear();

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.seed(sources, cur_gen, &mut open);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_dist = cn.dist;
            self.nodes[ci].open = false;

            let cp = self.point(ci);
            self.results.push(PathNode {
                pos: cp,
                cost: current_dist,
            });

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_dist + pather.cost(cp, np);
                if tentative > max_cost {
                    continue;
                }
                self.relax(ni, ci, tentative, cur_gen, &mut open);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "dijkstra_map: {} cells reached from {} sources",
            self.results.len(),
            sources.len()
        );
        &self.results
    }

    /// Compute the shortest distance from any source to `target`.
    ///
    /// The search stops as soon as the target is finalized. Returns `None`
    /// when the frontier drains without reaching it (or the target lies
    /// outside the range); an unreachable target is a normal outcome, not
    /// an error. A target that is itself a source yields `Some(0)`.
    ///
    /// Predecessor links are recorded; use [`path_to`](Self::path_to) to
    /// reconstruct the walk afterwards.
    pub fn dijkstra_to<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        target: Point,
    ) -> Option<i32> {
        let goal_idx = self.idx(target)?;

        for v in self.dist_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.results.clear();

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.seed(sources, cur_gen, &mut open);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = None;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_dist = cn.dist;
            self.nodes[ci].open = false;

            if ci == goal_idx {
                found = Some(current_dist);
                break;
            }

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_dist + pather.cost(cp, np);
                self.relax(ni, ci, tentative, cur_gen, &mut open);
            }
        }

        self.nbuf = nbuf;
        match found {
            Some(d) => log::debug!("dijkstra_to: target {target} finalized at distance {d}"),
            None => log::debug!("dijkstra_to: frontier drained, target {target} unreachable"),
        }
        found
    }

    /// Query the distance discovered for `p` by the last search run.
    ///
    /// Returns `None` if the point is outside the range or was not reached.
    pub fn dijkstra_at(&self, p: Point) -> Option<i32> {
        let i = self.idx(p)?;
        match self.dist_map[i] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Reconstruct the shortest walk to `target` from the last search run,
    /// source first, including both endpoints.
    ///
    /// Returns `None` if `target` was not reached. Intended for the target
    /// of the last [`dijkstra_to`](Self::dijkstra_to) call or any cell after
    /// a full [`dijkstra_map`](Self::dijkstra_map) drain; distances of cells
    /// left unfinalized by an early exit may still improve.
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        let ti = self.idx(target)?;
        if self.dist_map[ti] == UNREACHABLE {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = ti;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Seed every in-range source at distance 0.
    fn seed(&mut self, sources: &[Point], cur_gen: u32, open: &mut BinaryHeap<HeapEntry>) {
        for &src in sources {
            if let Some(si) = self.idx(src) {
                let n = &mut self.nodes[si];
                n.dist = 0;
                n.parent = usize::MAX;
                n.generation = cur_gen;
                n.open = true;
                self.dist_map[si] = 0;
                open.push(HeapEntry { idx: si, dist: 0 });
            }
        }
    }

    /// Relax the edge into `ni`: record the improved distance and push a new
    /// frontier entry. Entries made stale by the improvement stay in the
    /// heap and are discarded at pop time.
    fn relax(
        &mut self,
        ni: usize,
        parent: usize,
        tentative: i32,
        cur_gen: u32,
        open: &mut BinaryHeap<HeapEntry>,
    ) {
        let n = &mut self.nodes[ni];
        if n.generation == cur_gen {
            if tentative >= n.dist {
                return;
            }
        } else {
            n.generation = cur_gen;
        }

        n.dist = tentative;
        n.parent = parent;
        n.open = true;
        self.dist_map[ni] = tentative;
        open.push(HeapEntry {
            idx: ni,
            dist: tentative,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use ridge_core::Range;

    /// Unit-cost pather over a rectangle with optional walls.
    struct FloorPather {
        rng: Range,
        walls: Vec<Point>,
    }

    impl FloorPather {
        fn open(rng: Range) -> Self {
            Self {
                rng,
                walls: Vec::new(),
            }
        }
    }

    impl Pather for FloorPather {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for np in p.neighbors_4() {
                if self.rng.contains(np) && !self.walls.contains(&np) {
                    buf.push(np);
                }
            }
        }
    }

    impl WeightedPather for FloorPather {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    #[test]
    fn corridor_distance() {
        let rng = Range::new(0, 0, 5, 1);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let d = pr.dijkstra_to(&p, &[Point::new(0, 0)], Point::new(4, 0));
        assert_eq!(d, Some(4));
    }

    #[test]
    fn target_is_source() {
        let rng = Range::new(0, 0, 1, 1);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let d = pr.dijkstra_to(&p, &[Point::ZERO], Point::ZERO);
        assert_eq!(d, Some(0));
    }

    #[test]
    fn empty_sources_reach_nothing() {
        let rng = Range::new(0, 0, 3, 3);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        assert_eq!(pr.dijkstra_to(&p, &[], Point::new(2, 2)), None);
        assert!(pr.dijkstra_map(&p, &[], i32::MAX).is_empty());
    }

    #[test]
    fn out_of_range_sources_ignored() {
        let rng = Range::new(0, 0, 3, 1);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let d = pr.dijkstra_to(
            &p,
            &[Point::new(-5, 0), Point::new(0, 0)],
            Point::new(2, 0),
        );
        assert_eq!(d, Some(2));
    }

    #[test]
    fn multi_source_takes_nearest() {
        let rng = Range::new(0, 0, 10, 1);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let sources = [Point::new(0, 0), Point::new(7, 0)];
        let d = pr.dijkstra_to(&p, &sources, Point::new(6, 0));
        assert_eq!(d, Some(1));
    }

    #[test]
    fn walled_off_target_unreachable() {
        let rng = Range::new(0, 0, 5, 3);
        let mut pr = PathRange::new(rng);
        let p = FloorPather {
            rng,
            walls: vec![Point::new(2, 0), Point::new(2, 1), Point::new(2, 2)],
        };
        let d = pr.dijkstra_to(&p, &[Point::new(0, 1)], Point::new(4, 1));
        assert_eq!(d, None);
        assert_eq!(pr.path_to(Point::new(4, 1)), None);
    }

    #[test]
    fn map_respects_max_cost() {
        let rng = Range::new(0, 0, 10, 1);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let reached = pr.dijkstra_map(&p, &[Point::new(0, 0)], 3);
        assert_eq!(reached.len(), 4); // distances 0..=3
        assert_eq!(pr.dijkstra_at(Point::new(3, 0)), Some(3));
        assert_eq!(pr.dijkstra_at(Point::new(4, 0)), None);
    }

    #[test]
    fn map_distances_match_queries() {
        let rng = Range::new(0, 0, 4, 4);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        pr.dijkstra_map(&p, &[Point::new(0, 0)], i32::MAX);
        assert_eq!(pr.dijkstra_at(Point::new(0, 0)), Some(0));
        assert_eq!(pr.dijkstra_at(Point::new(3, 3)), Some(6));
        assert_eq!(pr.dijkstra_at(Point::new(4, 4)), None);
    }

    #[test]
    fn path_endpoints_and_length() {
        let rng = Range::new(0, 0, 6, 4);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let start = Point::new(0, 0);
        let goal = Point::new(5, 3);
        let d = pr.dijkstra_to(&p, &[start], goal).unwrap();
        let path = pr.path_to(goal).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path.len() as i32, d + 1);
        // Every hop is between cardinal neighbors.
        for pair in path.windows(2) {
            let delta = pair[1] - pair[0];
            assert_eq!(delta.x.abs() + delta.y.abs(), 1);
        }
    }

    /// Pather with one expensive edge, forcing a pushed cell to be improved
    /// (and its first frontier entry to go stale) before finalization.
    struct SlowEdgePather {
        rng: Range,
    }

    impl Pather for SlowEdgePather {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for np in p.neighbors_4() {
                if self.rng.contains(np) {
                    buf.push(np);
                }
            }
        }
    }

    impl WeightedPather for SlowEdgePather {
        fn cost(&self, from: Point, to: Point) -> i32 {
            if from == Point::new(0, 0) && to == Point::new(1, 0) {
                9
            } else {
                1
            }
        }
    }

    #[test]
    fn stale_entries_discarded_on_pop() {
        let rng = Range::new(0, 0, 2, 2);
        let mut pr = PathRange::new(rng);
        let p = SlowEdgePather { rng };
        // (1,0) is first pushed at distance 9 via the direct edge, then
        // improved to 3 via (0,1) and (1,1).
        let reached = pr.dijkstra_map(&p, &[Point::new(0, 0)], i32::MAX);
        assert_eq!(reached.len(), 4); // each cell finalized exactly once
        assert_eq!(pr.dijkstra_at(Point::new(1, 0)), Some(3));
        let path = pr.path_to(Point::new(1, 0)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn rerun_reuses_state() {
        let rng = Range::new(0, 0, 5, 5);
        let mut pr = PathRange::new(rng);
        let p = FloorPather::open(rng);
        let first = pr.dijkstra_to(&p, &[Point::new(0, 0)], Point::new(4, 4));
        let second = pr.dijkstra_to(&p, &[Point::new(0, 0)], Point::new(4, 4));
        assert_eq!(first, Some(8));
        assert_eq!(first, second);
    }
}
