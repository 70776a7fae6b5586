//! Hilbert curve lattice path built by recursive turtle traversal
//!
//! Follows the Lindenmayer production rules for the Hilbert curve. The two
//! mirror-image rules (usually written `A` and `B`) differ only in the sign of
//! their turns, so a single procedure parameterized by [`Handedness`] expands
//! both.

use crate::io::configuration::MAX_CURVE_DEPTH;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::lattice::{Point, Turn, Turtle};

/// Validated recursion depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    /// Accept a depth within `0..=MAX_CURVE_DEPTH`
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` exceeds [`MAX_CURVE_DEPTH`]
    pub fn new(depth: u32) -> Result<Self> {
        if depth > MAX_CURVE_DEPTH {
            return Err(invalid_parameter(
                "depth",
                &depth,
                &format!("must be at most {MAX_CURVE_DEPTH}"),
            ));
        }
        Ok(Self(depth))
    }

    /// Raw depth value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Cells along one side of the grid, `2^depth`
    pub const fn side(self) -> usize {
        1 << self.0
    }

    /// Cells in the whole grid, `4^depth`
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<i64> for Depth {
    type Error = crate::io::error::KnotError;

    fn try_from(depth: i64) -> Result<Self> {
        if depth < 0 {
            return Err(invalid_parameter(
                "depth",
                &depth,
                &"must be a non-negative integer",
            ));
        }
        match u32::try_from(depth) {
            Ok(depth) => Self::new(depth),
            Err(_) => Err(invalid_parameter(
                "depth",
                &depth,
                &format!("must be at most {MAX_CURVE_DEPTH}"),
            )),
        }
    }
}

/// Which of the two mirror-image production rules is being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Rule `A`: opens with a +90° turn
    Left,
    /// Rule `B`: opens with a -90° turn
    Right,
}

impl Handedness {
    /// The opposite rule
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Turn that opens and closes this rule
    pub const fn opening_turn(self) -> Turn {
        match self {
            Self::Left => Turn::Positive,
            Self::Right => Turn::Negative,
        }
    }
}

/// Ordered lattice points of a Hilbert curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HilbertPath {
    depth: Depth,
    points: Vec<Point>,
}

impl HilbertPath {
    /// Trace the curve of the given depth starting at the origin
    ///
    /// Visits every cell of the `2^depth` × `2^depth` grid exactly once, so
    /// the path holds `4^depth` points joined by unit axis-aligned steps.
    pub fn generate(depth: Depth) -> Self {
        let mut turtle = Turtle::with_capacity(depth.cell_count());
        expand(&mut turtle, Handedness::Left, depth.get());
        Self {
            depth,
            points: turtle.into_trail(),
        }
    }

    /// Depth the path was generated for
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Points in visiting order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, since even depth 0 visits the origin
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive `(from, to)` pairs, one per step
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }
}

// Rule A: + B F - A F A - F B +
// Rule B: - A F + B F B + F A -
fn expand(turtle: &mut Turtle, handedness: Handedness, depth: u32) {
    if depth == 0 {
        return;
    }
    let depth = depth - 1;
    let turn = handedness.opening_turn();

    turtle.turn(turn);
    expand(turtle, handedness.mirrored(), depth);
    turtle.forward();
    turtle.turn(turn.reversed());
    expand(turtle, handedness, depth);
    turtle.forward();
    expand(turtle, handedness, depth);
    turtle.turn(turn.reversed());
    turtle.forward();
    expand(turtle, handedness.mirrored(), depth);
    turtle.turn(turn);
}
