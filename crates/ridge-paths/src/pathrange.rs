use ridge_core::{Point, Range};

/// A position with its discovered cost, returned from distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// Per-cell node state for priority-queue searches.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best distance discovered so far this generation.
    pub(crate) dist: i32,
    /// Predecessor cell index, `usize::MAX` for sources.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry referencing the node array, ordered by distance for use in
/// `BinaryHeap`. A cell may appear multiple times with different distances;
/// outdated entries are recognized against the node array at pop time.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) dist: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance first.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Internal sentinel for "not yet discovered". Never surfaced to callers:
/// public queries report unreached cells as `None`.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for shortest-path searches on a grid rectangle.
///
/// `PathRange` owns the per-run state (node array, flat distance map,
/// results vector, neighbor scratch buffer) so that repeated queries reuse
/// allocations. Node invalidation between runs is lazy, via a generation
/// counter rather than clearing.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) dist_map: Vec<i32>,
    pub(crate) results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            dist_map: vec![UNREACHABLE; len],
            results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying rectangle, reallocating state as needed.
    ///
    /// If the new size fits within existing capacity, allocations are kept
    /// and only the generation counter is bumped so stale node entries are
    /// ignored. Otherwise the node and distance arrays are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            self.results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.dist_map.clear();
        self.dist_map.resize(new_len, UNREACHABLE);
        self.results.clear();
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
