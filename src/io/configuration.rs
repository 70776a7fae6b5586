//! Rendering constants and runtime configuration defaults

/// Side length of the knot motif in board units (must be odd for a centered crossing)
pub const KNOT_SIZE: usize = 27;

// Safety limits to prevent excessive memory allocation
/// Deepest Hilbert curve the path generator will build
pub const MAX_CURVE_DEPTH: u32 = 10;
/// Deepest lattice the compositor will render
pub const MAX_RENDER_DEPTH: u32 = 5;
/// Largest accepted pixel scale
pub const MAX_SCALE: f64 = 5.0;

// Default values for configurable parameters
/// Default recursion depth
pub const DEFAULT_DEPTH: i64 = 2;
/// Default pixels per board unit
pub const DEFAULT_SCALE: f64 = 3.0;

// Connector layout in board units, relative to a step midpoint
/// Shift applied to a connector lane to alternate the strand that passes over
pub const CONNECTOR_PARITY_OFFSET: f64 = 3.0;
/// Lane position of the outer connector layer along the crossing axis
pub const CONNECTOR_LANE: f64 = 10.0;
/// Offset across the step of the two strand layers
pub const CONNECTOR_STRAND_CROSS: f64 = 11.5;
/// Offset across the step of the background gap layer
pub const CONNECTOR_GAP_CROSS: f64 = 10.5;
/// Length of the outer weave layer along the crossing axis
pub const CONNECTOR_WEAVE_SPAN: f64 = 7.0;
/// Length of the wall layer along the crossing axis
pub const CONNECTOR_WALL_SPAN: f64 = 5.0;
/// Length of the background gap along the crossing axis
pub const CONNECTOR_GAP_SPAN: f64 = 3.0;
/// Thickness of the strand layers across the step
pub const CONNECTOR_STRAND_THICKNESS: f64 = 4.0;
/// Thickness of the background gap across the step
pub const CONNECTOR_GAP_THICKNESS: f64 = 6.0;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Terminal preview settings
/// Default number of character columns for the terminal preview
pub const DEFAULT_PREVIEW_COLUMNS: u32 = 80;
