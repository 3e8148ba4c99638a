//! The 2×2 open-cluster scan.

use crate::error::CheckError;
use warren_grid::{Coord, Grid, Tile};

/// Check that no 2×2 window of the interior is entirely open.
///
/// The carver already guarantees this twice over — square completion is
/// refused while corridors grow, and gap anchoring removes fully open
/// surrounds — so this scan re-derives the invariant from the finished
/// grid alone to catch regressions. `Begin` and `End` do not count as
/// open here: the cluster rule is about carved corridor.
///
/// # Errors
///
/// [`CheckError::FreeCluster`] carrying the window's top-left coordinate.
pub fn no_free_clusters(grid: &Grid) -> Result<(), CheckError> {
    let open = |c: Coord| grid.tile(c) == Tile::Empty;
    for y in 1..grid.height().saturating_sub(2) {
        for x in 1..grid.width().saturating_sub(2) {
            let at = Coord::new(x, y);
            if open(at) && open(at.east()) && open(at.south()) && open(at.south_east()) {
                return Err(CheckError::FreeCluster { at });
            }
        }
    }
    Ok(())
}
