//! Grid primitives for warren maze generation.
//!
//! This crate defines the tile alphabet ([`Tile`]), the dense row-major
//! [`Grid`], unsigned [`Coord`]inates with compass derivation, and the
//! validated [`Dimensions`]/[`BoundingBox`] pair that scopes where a carver
//! is allowed to write.
//!
//! Carvers and validators both iterate the one shared offset table,
//! [`COMPASS_OFFSETS`], so "direction 3" means the same thing everywhere.
//!
//! Coordinate derivation performs no bounds checking; pair it with the
//! bounds-checked [`Grid::get`] when the coordinate is not structurally
//! proven to be inside the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod coord;
pub mod error;
pub mod grid;
pub mod tile;

pub use bounds::{BoundingBox, Dimensions};
pub use coord::{Coord, COMPASS_OFFSETS, ORTHOGONAL_OFFSETS};
pub use error::GridError;
pub use grid::Grid;
pub use tile::Tile;
