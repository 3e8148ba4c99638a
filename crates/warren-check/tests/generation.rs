//! End-to-end generation stress: every maze a carver produces must pass
//! both structural validators, at the stress size and across a sweep of
//! arbitrary accepted dimensions.

use proptest::prelude::*;
use warren_carve::Carver;
use warren_check::{fully_traversable, no_free_clusters};
use warren_grid::{Coord, Dimensions, Grid, Tile};

/// Border closed, exactly one endpoint pair strictly inside, and no
/// transient markers left behind.
fn assert_structurally_sound(grid: &Grid) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        assert_eq!(grid.tile(Coord::new(x, 0)), Tile::Wall);
        assert_eq!(grid.tile(Coord::new(x, h - 1)), Tile::Wall);
    }
    for y in 0..h {
        assert_eq!(grid.tile(Coord::new(0, y)), Tile::Wall);
        assert_eq!(grid.tile(Coord::new(w - 1, y)), Tile::Wall);
    }
    assert_eq!(grid.count(Tile::Begin), 1);
    assert_eq!(grid.count(Tile::End), 1);
    assert_eq!(grid.count(Tile::Path), 0);
}

fn generate_and_validate(dims: Dimensions) {
    let mut carver = Carver::new(dims);
    carver.generate().unwrap();
    let grid = carver.grid();

    assert_structurally_sound(grid);
    no_free_clusters(grid).unwrap_or_else(|err| panic!("{err}\n{grid}"));

    let mut sampler = carver.validation_sampler();
    fully_traversable(grid, &mut sampler).unwrap_or_else(|err| panic!("{err}\n{grid}"));
}

#[test]
fn one_hundred_20x20_mazes_all_validate() {
    let dims = Dimensions::new(20, 20).unwrap();
    for _ in 0..100 {
        generate_and_validate(dims);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_accepted_dimensions_validate(width in 3u32..=28, height in 3u32..=28) {
        prop_assume!(Dimensions::new(width, height).is_ok());
        generate_and_validate(Dimensions::new(width, height).unwrap());
    }
}
