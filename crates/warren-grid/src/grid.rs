//! Dense row-major tile grid with the textual rendering contract.

use crate::bounds::Dimensions;
use crate::coord::Coord;
use crate::error::GridError;
use crate::tile::Tile;
use std::fmt::{self, Write as _};

/// A dense 2D tile grid, `height` rows by `width` columns, row-major.
///
/// Two access levels:
///
/// - [`get`](Self::get)/[`get_mut`](Self::get_mut) bounds-check and
///   return `Option` — for coordinates derived without proof, such as
///   compass neighbours near an edge.
/// - [`tile`](Self::tile)/[`set`](Self::set) index directly — for
///   coordinates already known to be in bounds (interior sweeps).
///   Out of bounds here is a caller bug and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A grid of the given dimensions with every tile `Empty`.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            width: dims.width(),
            height: dims.height(),
            tiles: vec![Tile::Empty; dims.width() as usize * dims.height() as usize],
        }
    }

    /// Grid width (columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, coord: Coord) -> usize {
        coord.y as usize * self.width as usize + coord.x as usize
    }

    /// Whether `coord` addresses a tile of this grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Bounds-checked read.
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if self.in_bounds(coord) {
            Some(self.tiles[self.index(coord)])
        } else {
            None
        }
    }

    /// Bounds-checked write access.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        if self.in_bounds(coord) {
            let i = self.index(coord);
            Some(&mut self.tiles[i])
        } else {
            None
        }
    }

    /// Direct read of a coordinate the caller has proven in bounds.
    pub fn tile(&self, coord: Coord) -> Tile {
        self.tiles[self.index(coord)]
    }

    /// Direct write to a coordinate the caller has proven in bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) {
        let i = self.index(coord);
        self.tiles[i] = tile;
    }

    /// Number of tiles currently equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Parse a grid previously rendered through `Display`.
    ///
    /// # Errors
    ///
    /// [`GridError::UnknownSymbol`] for characters outside the tile
    /// alphabet, [`GridError::RaggedRows`] when lines differ in length,
    /// [`GridError::EmptyText`] when no tiles are present.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let mut tiles = Vec::with_capacity(line.len());
            for symbol in line.chars() {
                let tile = Tile::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, row })?;
                tiles.push(tile);
            }
            if let Some(first) = rows.first() {
                if tiles.len() != first.len() {
                    return Err(GridError::RaggedRows {
                        row,
                        len: tiles.len(),
                        expected: first.len(),
                    });
                }
            }
            rows.push(tiles);
        }
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::EmptyText);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            tiles: rows.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for Grid {
    /// Rows top-to-bottom, one symbol per tile, rows separated by `'\n'`
    /// with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.tile(Coord::new(x, y)).symbol())?;
            }
        }
        Ok(())
    }
}
