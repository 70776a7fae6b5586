//! Error types for path generation, compositing and terminal output

use std::fmt;

/// Main error type for all knot rendering operations
#[derive(Debug)]
pub enum KnotError {
    /// Render or curve parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Motif glyph without a bound category
    UnknownSymbol {
        /// The offending glyph
        glyph: char,
        /// Motif row of the glyph
        row: usize,
        /// Motif column of the glyph
        col: usize,
    },

    /// Motif text does not describe a square grid of the expected size
    MalformedMotif {
        /// Description of what's wrong with the motif text
        reason: String,
    },

    /// Color string could not be parsed
    InvalidColor {
        /// The rejected color text
        value: String,
        /// Explanation of why the color is invalid
        reason: String,
    },

    /// Traversal step that is not a unit axis-aligned move
    ///
    /// Only produced when the path generator and the compositor disagree on
    /// the turtle model, so it always indicates a logic defect.
    DisconnectedStep {
        /// Index of the step's destination point within the path
        index: usize,
        /// Point the step leaves
        from: [i32; 2],
        /// Point the step arrives at
        to: [i32; 2],
    },

    /// Pixel block region falls outside the canvas
    BlockOutOfBounds {
        /// Canvas operation that was attempted
        operation: &'static str,
        /// Region origin x
        x: u32,
        /// Region origin y
        y: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Canvas dimensions (width, height)
        canvas: (u32, u32),
    },

    /// Writing rendered output failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownSymbol { glyph, row, col } => {
                write!(
                    f,
                    "Motif glyph '{glyph}' at row {row}, column {col} has no category"
                )
            }
            Self::MalformedMotif { reason } => {
                write!(f, "Malformed motif: {reason}")
            }
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::DisconnectedStep { index, from, to } => {
                write!(
                    f,
                    "Internal error: path step {index} from ({}, {}) to ({}, {}) is not a unit horizontal or vertical move",
                    from[0], from[1], to[0], to[1]
                )
            }
            Self::BlockOutOfBounds {
                operation,
                x,
                y,
                width,
                height,
                canvas,
            } => {
                write!(
                    f,
                    "Block {width}x{height} at ({x}, {y}) exceeds {}x{} canvas during {operation}",
                    canvas.0, canvas.1
                )
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for KnotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for knot rendering results
pub type Result<T> = std::result::Result<T, KnotError>;

impl From<std::io::Error> for KnotError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KnotError {
    KnotError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an output error for a failed terminal or stream write
pub const fn output_error(operation: &'static str, source: std::io::Error) -> KnotError {
    KnotError::Output { operation, source }
}
