//! Integer lattice points and the turtle cursor that walks between them

/// Integer lattice point visited by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates as an `[x, y]` pair
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

/// Quarter turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Rotate heading by +90°
    Positive,
    /// Rotate heading by -90°
    Negative,
}

impl Turn {
    /// The turn that undoes this one
    pub const fn reversed(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Unit heading vector along one lattice axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    dx: i32,
    dy: i32,
}

impl Default for Heading {
    fn default() -> Self {
        Self::EAST
    }
}

impl Heading {
    /// Heading along +x
    pub const EAST: Self = Self { dx: 1, dy: 0 };

    /// Heading after a quarter turn
    #[must_use]
    pub const fn rotated(self, turn: Turn) -> Self {
        match turn {
            Turn::Positive => Self {
                dx: -self.dy,
                dy: self.dx,
            },
            Turn::Negative => Self {
                dx: self.dy,
                dy: -self.dx,
            },
        }
    }

    /// Components as a `(dx, dy)` pair
    pub const fn components(self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

/// Cursor with a position and heading that records every point it steps onto
#[derive(Debug, Clone)]
pub struct Turtle {
    position: Point,
    heading: Heading,
    trail: Vec<Point>,
}

impl Turtle {
    /// Start at the origin heading along +x, with the origin already recorded
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Like [`Turtle::new`] with room reserved for `capacity` recorded points
    pub fn with_capacity(capacity: usize) -> Self {
        let mut trail = Vec::with_capacity(capacity.max(1));
        trail.push(Point::default());
        Self {
            position: Point::default(),
            heading: Heading::default(),
            trail,
        }
    }

    /// Advance one unit along the heading and record the new position
    pub fn forward(&mut self) {
        let (dx, dy) = self.heading.components();
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
        self.trail.push(self.position);
    }

    /// Rotate the heading in place; nothing is recorded
    pub const fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.rotated(turn);
    }

    /// Current position
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Current heading
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Consume the turtle and return every recorded point in visiting order
    pub fn into_trail(self) -> Vec<Point> {
        self.trail
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}
