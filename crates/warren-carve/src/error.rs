//! Carver error types.

use std::fmt;
use warren_grid::{Coord, Tile};

/// Fatal internal failure during maze construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarveError {
    /// An interior tile held something other than `Path` or `Empty` when
    /// the inversion phase ran — a coordinate escaped the carving
    /// invariants. Indicates a carver bug, never bad user input.
    UnexpectedTile {
        /// Where the defect sits.
        coord: Coord,
        /// The value found there.
        tile: Tile,
    },
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedTile { coord, tile } => {
                write!(f, "unexpected tile {tile:?} at {coord} during inversion")
            }
        }
    }
}

impl std::error::Error for CarveError {}
