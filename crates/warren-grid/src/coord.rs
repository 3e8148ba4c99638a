//! Unsigned grid coordinates and the shared neighbour-offset tables.

use smallvec::SmallVec;
use std::fmt;

/// All 8 compass offsets as `(dx, dy)`: N, S, W, E, NW, NE, SW, SE.
///
/// One table shared by the carver and the validators; an index into it is
/// a stable name for a direction (the gap repairer picks one at random).
pub const COMPASS_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// The 4 cardinal offsets as `(dx, dy)`: N, W, S, E.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// An unsigned 2D grid coordinate.
///
/// Ordering is lexicographic by `(x, y)`, which is what makes coordinates
/// usable as members of ordered sets during carving.
///
/// Derivation methods perform **no bounds checking**: stepping north or
/// west off a zero component wraps, producing a coordinate that fails any
/// subsequent bounds-checked grid lookup. Callers must bounds-check before
/// dereferencing a grid with a derived coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, increasing eastwards.
    pub x: u32,
    /// Row, increasing southwards.
    pub y: u32,
}

impl Coord {
    /// Construct from column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// One step north (up).
    pub const fn north(self) -> Self {
        Self::new(self.x, self.y.wrapping_sub(1))
    }

    /// One step south (down).
    pub const fn south(self) -> Self {
        Self::new(self.x, self.y.wrapping_add(1))
    }

    /// One step west (left).
    pub const fn west(self) -> Self {
        Self::new(self.x.wrapping_sub(1), self.y)
    }

    /// One step east (right).
    pub const fn east(self) -> Self {
        Self::new(self.x.wrapping_add(1), self.y)
    }

    /// One step north-west.
    pub const fn north_west(self) -> Self {
        self.north().west()
    }

    /// One step north-east.
    pub const fn north_east(self) -> Self {
        self.north().east()
    }

    /// One step south-west.
    pub const fn south_west(self) -> Self {
        self.south().west()
    }

    /// One step south-east.
    pub const fn south_east(self) -> Self {
        self.south().east()
    }

    /// Apply a single `(dx, dy)` offset, e.g. one entry of
    /// [`COMPASS_OFFSETS`].
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx as u32),
            self.y.wrapping_add(dy as u32),
        )
    }

    /// The four cardinal neighbours in [`ORTHOGONAL_OFFSETS`] order.
    pub fn orthogonal_neighbours(self) -> [Self; 4] {
        ORTHOGONAL_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// All eight compass neighbours in [`COMPASS_OFFSETS`] order.
    pub fn compass_neighbours(self) -> SmallVec<[Self; 8]> {
        COMPASS_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
