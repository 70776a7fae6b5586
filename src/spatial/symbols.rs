//! Category alphabet of the symbolic knot motif

use std::fmt;

/// Category of a single motif cell
///
/// The two weave categories render in distinct colors so that crossings
/// read as one strand passing over another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Empty space around and between strands
    Background,
    /// Outline bordering every strand
    Wall,
    /// Strand drawn in the primary weave color
    WeaveA,
    /// Strand drawn in the secondary weave color
    WeaveB,
}

impl Symbol {
    /// Every category, in palette index order
    pub const ALL: [Self; 4] = [Self::Background, Self::Wall, Self::WeaveA, Self::WeaveB];

    /// Glyph used for this category in motif text
    pub const fn glyph(self) -> char {
        match self {
            Self::Background => '.',
            Self::Wall => '#',
            Self::WeaveA => '~',
            Self::WeaveB => '*',
        }
    }

    /// Look up the category drawn with a glyph
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Self::Background),
            '#' => Some(Self::Wall),
            '~' => Some(Self::WeaveA),
            '*' => Some(Self::WeaveB),
            _ => None,
        }
    }

    /// Position of this category in a palette table
    pub const fn index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Wall => 1,
            Self::WeaveA => 2,
            Self::WeaveB => 3,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
