//! Frontier-expansion maze carving.
//!
//! [`Carver`] grows a connected tree of corridor tiles outward from one
//! random interior seed, keeping every corridor a single tile wide by
//! refusing any step that would complete a 2×2 open block. Carving is
//! followed by inversion (unvisited interior becomes wall), a gap-closing
//! repair pass that anchors free-floating wall posts, and random endpoint
//! placement.
//!
//! Randomness comes from [`CoordSampler`], a per-carver ChaCha8 source
//! seeded from OS entropy. There is intentionally no fixed-seed replay
//! constructor; two carvers in one process produce uncorrelated mazes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod carver;
pub mod error;
pub mod sampler;

pub use carver::Carver;
pub use error::CarveError;
pub use sampler::CoordSampler;
