//! Connector stitching between neighbouring tiles along the traversal path
//!
//! Each path step crosses the shared edge of two tiles. A three-layer patch
//! painted over that edge joins the two tiles' strands, and the lane of the
//! patch shifts with the parity of the step so that consecutive junctions
//! alternate which strand passes over.

use log::error;

use crate::algorithm::hilbert::HilbertPath;
use crate::io::canvas::Canvas;
use crate::io::configuration::{
    CONNECTOR_GAP_CROSS, CONNECTOR_GAP_SPAN, CONNECTOR_GAP_THICKNESS, CONNECTOR_LANE,
    CONNECTOR_PARITY_OFFSET, CONNECTOR_STRAND_CROSS, CONNECTOR_STRAND_THICKNESS,
    CONNECTOR_WALL_SPAN, CONNECTOR_WEAVE_SPAN, KNOT_SIZE,
};
use crate::io::error::{KnotError, Result};
use crate::spatial::lattice::Point;
use crate::spatial::palette::Palette;
use crate::spatial::symbols::Symbol;

/// Direction of a path step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAxis {
    /// Step changes x only
    Horizontal,
    /// Step changes y only
    Vertical,
}

/// Axis-aligned rectangle in board units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl BoardRect {
    /// The same rectangle in device pixels
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

/// One layer of a connector patch
///
/// `lane` and `span` run along the crossing axis (perpendicular to the
/// step), `cross` and `thickness` run along the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorLayer {
    /// Category whose color fills the layer
    pub symbol: Symbol,
    /// Start along the crossing axis, before the parity offset
    pub lane: f64,
    /// Start along the step axis
    pub cross: f64,
    /// Extent along the crossing axis
    pub span: f64,
    /// Extent along the step axis
    pub thickness: f64,
}

/// Connector layers in painting order
pub const CONNECTOR_LAYERS: [ConnectorLayer; 3] = [
    ConnectorLayer {
        symbol: Symbol::WeaveA,
        lane: CONNECTOR_LANE,
        cross: CONNECTOR_STRAND_CROSS,
        span: CONNECTOR_WEAVE_SPAN,
        thickness: CONNECTOR_STRAND_THICKNESS,
    },
    ConnectorLayer {
        symbol: Symbol::Wall,
        lane: CONNECTOR_LANE + 1.0,
        cross: CONNECTOR_STRAND_CROSS,
        span: CONNECTOR_WALL_SPAN,
        thickness: CONNECTOR_STRAND_THICKNESS,
    },
    ConnectorLayer {
        symbol: Symbol::Background,
        lane: CONNECTOR_LANE + 2.0,
        cross: CONNECTOR_GAP_CROSS,
        span: CONNECTOR_GAP_SPAN,
        thickness: CONNECTOR_GAP_THICKNESS,
    },
];

/// Junction patch for a single path step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Direction of the step
    pub axis: StepAxis,
    /// Step midpoint in board units
    pub midpoint: [f64; 2],
    /// Parity shift applied to every layer lane
    pub offset: f64,
}

impl Connector {
    /// Classify the step `from -> to`, which is the `index`-th point of its path
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not exactly one unit along exactly one axis
    pub fn between(index: usize, from: Point, to: Point) -> Result<Self> {
        // Widened so that steps between far-apart points cannot overflow
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        let vertical = dx == 0;

        if vertical == (dy == 0) || dx.abs() + dy.abs() != 1 {
            error!(
                "path step {index} from {:?} to {:?} is not a unit axis-aligned move",
                from.to_array(),
                to.to_array()
            );
            return Err(KnotError::DisconnectedStep {
                index,
                from: from.to_array(),
                to: to.to_array(),
            });
        }

        let axis = if vertical {
            StepAxis::Vertical
        } else {
            StepAxis::Horizontal
        };

        let cell = KNOT_SIZE as f64;
        let midpoint = [
            (f64::from(from.x) + f64::from(to.x)) / 2.0 * cell,
            (f64::from(from.y) + f64::from(to.y)) / 2.0 * cell,
        ];

        let parity = (i64::from(from.x.min(to.x)) + i64::from(from.y.min(to.y))).rem_euclid(2);
        let offset = if parity == 1 {
            -CONNECTOR_PARITY_OFFSET
        } else {
            CONNECTOR_PARITY_OFFSET
        };

        Ok(Self {
            axis,
            midpoint,
            offset,
        })
    }

    /// Rectangles to paint, in order, with the category of each
    pub fn layers(&self) -> impl Iterator<Item = (Symbol, BoardRect)> + '_ {
        CONNECTOR_LAYERS.iter().map(|layer| {
            let [mx, my] = self.midpoint;
            let lane = layer.lane + self.offset;
            let rect = match self.axis {
                StepAxis::Vertical => BoardRect {
                    x: mx + lane,
                    y: my + layer.cross,
                    width: layer.span,
                    height: layer.thickness,
                },
                StepAxis::Horizontal => BoardRect {
                    x: mx + layer.cross,
                    y: my + lane,
                    width: layer.thickness,
                    height: layer.span,
                },
            };
            (layer.symbol, rect)
        })
    }
}

/// Classify every step of a path
///
/// # Errors
///
/// Returns an error at the first step that is not a unit axis-aligned move
pub fn connectors(points: &[Point]) -> Result<Vec<Connector>> {
    points
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| match pair {
            [from, to] => Some(Connector::between(index + 1, *from, *to)),
            _ => None,
        })
        .collect()
}

/// Paint a connector patch for every step of the path
///
/// Connectors are validated before anything is painted, so a bad step
/// leaves the canvas untouched. Returns the number of junctions drawn.
///
/// # Errors
///
/// Returns an error if any step is not a unit axis-aligned move
pub fn stitch<C: Canvas>(
    canvas: &mut C,
    path: &HilbertPath,
    palette: &Palette,
    scale: f64,
) -> Result<usize> {
    let junctions = connectors(path.points())?;

    for connector in &junctions {
        for (symbol, rect) in connector.layers() {
            let device = rect.scaled(scale);
            canvas.fill_rect(
                palette.color(symbol),
                device.x,
                device.y,
                device.width,
                device.height,
            );
        }
    }

    Ok(junctions.len())
}
