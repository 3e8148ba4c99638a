//! Validated maze dimensions and the inclusive bounding box.

use crate::coord::Coord;
use crate::error::GridError;

/// Validated width/height of a maze grid.
///
/// Both dimensions are at least 3 (border ring plus interior) and the
/// interior holds at least two tiles, so `Begin` and `End` always have
/// somewhere to land. Notably 3×3 is rejected: its interior is a single
/// tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Minimum length of either dimension.
    pub const MIN_DIM: u32 = 3;

    /// Validate and construct.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionTooSmall`] if either dimension is below 3;
    /// [`GridError::InteriorTooSmall`] if the area inside the border
    /// holds fewer than two tiles.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width < Self::MIN_DIM {
            return Err(GridError::DimensionTooSmall {
                name: "width",
                value: width,
            });
        }
        if height < Self::MIN_DIM {
            return Err(GridError::DimensionTooSmall {
                name: "height",
                value: height,
            });
        }
        let cells = u64::from(width - 2) * u64::from(height - 2);
        if cells < 2 {
            return Err(GridError::InteriorTooSmall { cells });
        }
        Ok(Self { width, height })
    }

    /// Grid width (columns).
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Grid height (rows).
    pub const fn height(self) -> u32 {
        self.height
    }
}

/// An inclusive rectangle of coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left corner (inclusive).
    pub min: Coord,
    /// Bottom-right corner (inclusive).
    pub max: Coord,
}

impl BoundingBox {
    /// The rectangle strictly inside the border ring: the only region a
    /// carver may mutate besides the border fill itself.
    pub fn interior(dims: Dimensions) -> Self {
        Self {
            min: Coord::new(1, 1),
            max: Coord::new(dims.width() - 2, dims.height() - 2),
        }
    }

    /// Whether `coord` lies inside the box, inclusive on all edges.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Row-major iteration over every coordinate in the box.
    pub fn iter(&self) -> impl Iterator<Item = Coord> {
        let min = self.min;
        let max = self.max;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Coord::new(x, y)))
    }
}
