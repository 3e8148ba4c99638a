//! Validation failure diagnostics.

use std::fmt;
use warren_grid::Coord;

/// A structural check failed; the maze should be reported as bad.
///
/// Non-fatal by design: the caller decides whether to regenerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A 2×2 window of the interior is entirely open corridor.
    FreeCluster {
        /// Top-left coordinate of the offending window.
        at: Coord,
    },
    /// An open tile the flood fill could not reach from its seed.
    Unreachable {
        /// First such tile in row-major order.
        at: Coord,
    },
    /// The grid has no open tile inside the sampler's box to seed a
    /// flood fill from.
    NoOpenTiles,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeCluster { at } => {
                write!(f, "free 2x2 open cluster with top-left corner at {at}")
            }
            Self::Unreachable { at } => {
                write!(f, "open tile at {at} is unreachable from the rest of the maze")
            }
            Self::NoOpenTiles => {
                write!(f, "no open tile available to seed the flood fill")
            }
        }
    }
}

impl std::error::Error for CheckError {}
