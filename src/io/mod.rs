//! Input/output: drawing surface, configuration, errors and the command line

/// Raster drawing surface
pub mod canvas;
/// Command-line parsing and render driver
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal preview of a finished render
pub mod preview;
/// Render progress display
pub mod progress;
