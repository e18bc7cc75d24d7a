//! Marker-annotated elevation maps built from text.
//!
//! A [`HeightMap`] parses rows of `a..z` elevation letters into a flat
//! integer matrix. `S` marks the start at the lowest elevation, `E` the
//! summit at the highest. The map is immutable after construction.

use std::fmt;

use ridge_core::{Point, Range};

/// Lowest elevation value (`'a'` and the `S` marker).
pub const MIN_HEIGHT: i32 = 1;

/// Highest elevation value (`'z'` and the `E` marker).
pub const MAX_HEIGHT: i32 = 26;

/// An immutable rectangular elevation matrix with start and summit markers.
#[derive(Debug, Clone)]
pub struct HeightMap {
    heights: Vec<i32>,
    rng: Range,
    start: Point,
    summit: Point,
}

impl HeightMap {
    /// Parse a map from newline-separated rows.
    ///
    /// Rows must be equal in width and drawn from `a..z` plus the markers
    /// `S` (start, elevation 1) and `E` (summit, elevation 26), both of
    /// which must be present. The first occurrence of each marker wins.
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual rows.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let mut heights = Vec::new();
        let mut width: i32 = -1;
        let mut start = None;
        let mut summit = None;
        let mut y: i32 = 0;

        for line in s.trim().lines() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                let h = match ch {
                    'S' => {
                        start.get_or_insert(p);
                        MIN_HEIGHT
                    }
                    'E' => {
                        summit.get_or_insert(p);
                        MAX_HEIGHT
                    }
                    'a'..='z' => (ch as i32 - 'a' as i32) + 1,
                    _ => return Err(MapError::InvalidSymbol { ch, pos: p }),
                };
                heights.push(h);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(MapError::RaggedRow {
                    row: y as usize,
                    expected: width as usize,
                    found: x as usize,
                });
            }
            y += 1;
        }

        if width <= 0 || y == 0 {
            return Err(MapError::Empty);
        }
        let start = start.ok_or(MapError::MissingStart)?;
        let summit = summit.ok_or(MapError::MissingSummit)?;

        Ok(Self {
            heights,
            rng: Range::new(0, 0, width, y),
            start,
            summit,
        })
    }

    /// The bounding range of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.rng
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.rng.size()
    }

    /// Elevation at `p`, or `None` if out of bounds.
    #[inline]
    pub fn height_at(&self, p: Point) -> Option<i32> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(self.heights[(p.y * self.rng.width() + p.x) as usize])
    }

    /// Position of the `S` marker.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the `E` marker.
    #[inline]
    pub fn summit(&self) -> Point {
        self.summit
    }

    /// Every cell at the map's global minimum elevation, row-major.
    ///
    /// The start marker is always a member, since `S` decodes to the lowest
    /// value in the alphabet. Adjacency between the cells is irrelevant:
    /// each one is an independent candidate trailhead.
    pub fn lowest_points(&self) -> Vec<Point> {
        let min = self.heights.iter().copied().min().unwrap_or(MIN_HEIGHT);
        self.rng
            .iter()
            .filter(|&p| self.height_at(p) == Some(min))
            .collect()
    }
}

/// Errors that can occur when parsing a height map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input contained no cells.
    Empty,
    /// A row's width differed from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `a..z`, `S`, `E`.
    InvalidSymbol { ch: char, pos: Point },
    /// No `S` marker present.
    MissingStart,
    /// No `E` marker present.
    MissingSummit,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "height map is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "height map row {row} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "height map contains invalid symbol {ch:?} at {pos}")
            }
            Self::MissingStart => write!(f, "height map has no start marker 'S'"),
            Self::MissingSummit => write!(f, "height map has no summit marker 'E'"),
        }
    }
}

impl std::error::Error for MapError {}
