//! Flood-fill connectivity check.

use crate::error::CheckError;
use warren_carve::CoordSampler;
use warren_grid::{Coord, Grid, Tile};

/// Check that every open tile is reachable from every other open tile.
///
/// Operates on a private scratch copy; the caller's grid is never
/// mutated. `Begin` and `End` are cleared back to open corridor in the
/// copy, a random open seed is drawn through `sampler`, and the fill
/// expands through all eight compass directions — corner-to-corner
/// adjacency counts as connected, the same rule the gap anchoring uses.
///
/// # Errors
///
/// [`CheckError::NoOpenTiles`] if the sampler's box contains nothing to
/// seed from; [`CheckError::Unreachable`] naming the first open tile in
/// row-major order that the fill never reached.
pub fn fully_traversable(grid: &Grid, sampler: &mut CoordSampler) -> Result<(), CheckError> {
    let mut scratch = grid.clone();

    // Endpoints sit on corridor tiles; treat them as such.
    for y in 0..scratch.height() {
        for x in 0..scratch.width() {
            let coord = Coord::new(x, y);
            if matches!(scratch.tile(coord), Tile::Begin | Tile::End) {
                scratch.set(coord, Tile::Empty);
            }
        }
    }

    // The seed loop resamples until it hits an open tile, which is only
    // bounded if one exists where the sampler can land.
    if !sampler
        .bounds()
        .iter()
        .any(|c| scratch.get(c) == Some(Tile::Empty))
    {
        return Err(CheckError::NoOpenTiles);
    }

    let seed = loop {
        let candidate = sampler.sample();
        if scratch.get(candidate) == Some(Tile::Empty) {
            break candidate;
        }
    };
    scratch.set(seed, Tile::Path);

    let mut frontier = vec![seed];
    while let Some(coord) = frontier.pop() {
        for neighbour in coord.compass_neighbours() {
            if scratch.get(neighbour) == Some(Tile::Empty) {
                scratch.set(neighbour, Tile::Path);
                frontier.push(neighbour);
            }
        }
    }

    for y in 0..scratch.height() {
        for x in 0..scratch.width() {
            let at = Coord::new(x, y);
            if scratch.tile(at) == Tile::Empty {
                return Err(CheckError::Unreachable { at });
            }
        }
    }
    Ok(())
}
