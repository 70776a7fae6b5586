//! Spatial data structures for the knot lattice
//!
//! This module contains spatial-related functionality including:
//! - Lattice points and the turtle cursor
//! - Motif category symbols and their colors
//! - The symbolic knot motif and its rotated variant

/// Lattice points, headings and turtle traversal state
pub mod lattice;
/// Category-to-color table
pub mod palette;
/// Motif category alphabet
pub mod symbols;
/// Knot motif templates and rotations
pub mod tiles;

pub use lattice::Point;
pub use palette::Palette;
pub use symbols::Symbol;
pub use tiles::{KnotTemplates, Motif};
