//! Benchmark profiles for warren maze generation.
//!
//! Provides pre-carved grids and dimension presets shared by the
//! benchmarks in `benches/gen_ops.rs`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_carve::Carver;
use warren_grid::Dimensions;

/// The stress size the generation regression suite uses.
pub fn stress_dims() -> Dimensions {
    Dimensions::new(20, 20).expect("20x20 is a valid maze size")
}

/// A larger profile for validator throughput measurements.
pub fn large_dims() -> Dimensions {
    Dimensions::new(64, 64).expect("64x64 is a valid maze size")
}

/// Carve one finished maze of the given size.
pub fn carved(dims: Dimensions) -> Carver {
    let mut carver = Carver::new(dims);
    carver
        .generate()
        .expect("generation is total for valid dimensions");
    carver
}
