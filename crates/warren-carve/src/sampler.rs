//! Uniform coordinate sampling over a bounding box.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_grid::{BoundingBox, Coord};

/// A stateful source of uniform coordinates and choice samples.
///
/// Each sampler owns its own ChaCha8 generator seeded from OS entropy at
/// construction, so samplers created anywhere in the same process produce
/// statistically uncorrelated sequences. There is deliberately no
/// fixed-seed constructor: maze generation carries no replay contract.
///
/// Not thread-safe and not clonable by design — one sampler per carver,
/// never shared; a clone would replay the same stream.
#[derive(Debug)]
pub struct CoordSampler {
    rng: ChaCha8Rng,
    bounds: BoundingBox,
}

impl CoordSampler {
    /// A fresh, independently seeded sampler over `bounds` (inclusive).
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
            bounds,
        }
    }

    /// The box this sampler draws from.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// A coordinate with `x` and `y` independently uniform over the box,
    /// both bounds inclusive.
    pub fn sample(&mut self) -> Coord {
        Coord::new(
            self.rng.random_range(self.bounds.min.x..=self.bounds.max.x),
            self.rng.random_range(self.bounds.min.y..=self.bounds.max.y),
        )
    }

    /// `true` with probability 1/2.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform index in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn pick_index(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}
