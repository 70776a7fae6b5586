//! Endless-knot lattices stitched along a Hilbert curve
//!
//! A fixed 27×27 knot motif is tiled over a `2^depth` × `2^depth` board in
//! two checkerboard-alternating orientations. Connector patches painted at
//! every step of a Hilbert curve then join neighbouring tiles, so the board
//! reads as one continuous strand weaving over and under itself.

#![forbid(unsafe_code)]

/// Path generation, tiling, stitching and compositing
pub mod algorithm;
/// Drawing surface, configuration, errors and the command line
pub mod io;
/// Lattice points, motif templates and colors
pub mod spatial;

pub use io::error::{KnotError, Result};
