use ridge_core::Point;

/// Neighbor enumeration for a searchable grid.
///
/// Implementations append only the cells that may legally be stepped to from
/// `p`, so edge legality (walls, climbing limits, ...) lives entirely in the
/// implementor and the search engine stays topology-agnostic.
pub trait Pather {
    /// Append the legal successors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}
