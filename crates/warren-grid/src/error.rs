//! Error types for dimension validation and grid parsing.

use std::fmt;

/// Errors from dimension validation and textual grid parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is below the 3-tile minimum (1-tile border ring plus
    /// a usable interior).
    DimensionTooSmall {
        /// Which dimension: `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The interior (area inside the border) cannot hold both endpoints.
    InteriorTooSmall {
        /// Number of interior tiles.
        cells: u64,
    },
    /// A parsed line contains a character outside the tile alphabet.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row it appeared on.
        row: usize,
    },
    /// Parsed rows are not all the same length.
    RaggedRows {
        /// Zero-based row with the mismatched length.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length, taken from the first row.
        expected: usize,
    },
    /// The parsed text contains no tiles at all.
    EmptyText,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { name, value } => {
                write!(
                    f,
                    "{name} must be at least 3 to fit the border, got {value}"
                )
            }
            Self::InteriorTooSmall { cells } => {
                write!(
                    f,
                    "interior of {cells} tile(s) cannot hold both endpoints (need at least 2)"
                )
            }
            Self::UnknownSymbol { symbol, row } => {
                write!(f, "unknown tile symbol {symbol:?} on row {row}")
            }
            Self::RaggedRows { row, len, expected } => {
                write!(f, "row {row} has length {len}, expected {expected}")
            }
            Self::EmptyText => write!(f, "grid text contains no tiles"),
        }
    }
}

impl std::error::Error for GridError {}
