//! Symbolic knot motif and its two tiling orientations
//!
//! The motif is parsed once from a hand-drawn text grid. The rotated
//! variant is derived from it, and both are read-only templates for the
//! lifetime of the compositor that owns them.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::KNOT_SIZE;
use crate::io::error::{KnotError, Result};
use crate::spatial::symbols::Symbol;

/// Hand-drawn endless knot, one text row per first motif index
pub const CANONICAL_KNOT: &str = "
......#########...#########
......#~~~~~~~#...#~~~~~~~#
......#~#####~#...#~#####~#
...##########~###########~#
...#********#~#********##~#
...#*########~########*##~#
#######~###########~#####~#
#~~~~~#~#~~~~~~~~~#~#~~~~~#
#~#####~###########~#######
#~##*##~###########~##*#...
#~##*##~##*******##~##*#...
#~##*##~##*#####*##~##*#...
#~##*########~########*####
#~~#*#~~~~~~#~#~~~~~~#*#~~#
####*########~########*##~#
...#*##~##*#####*##~##*##~#
...#*##~##*******##~##*##~#
...#*##~###########~##*##~#
#######~###########~##*##~#
#~~~~~#~#~~~~~~~~~#~#~~~~~#
#~#####~###########~#######
#~##*########~########*#...
#~##********#~#********#...
#~###########~##########...
#~#####~#...#~#####~#......
#~~~~~~~#...#~~~~~~~#......
#########...#########......
";

/// A `KNOT_SIZE` × `KNOT_SIZE` grid of category symbols
///
/// Cell `(i, j)` is drawn at board offset `(i, j)` within its tile, so the
/// first index runs along board x and the second along board y.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    cells: Array2<Symbol>,
}

impl Motif {
    /// Parse motif text, one line per first index
    ///
    /// Leading and trailing blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not `KNOT_SIZE` lines of `KNOT_SIZE`
    /// glyphs, or contains a glyph with no category
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.trim().lines().map(str::trim_end).collect();

        if rows.len() != KNOT_SIZE {
            return Err(KnotError::MalformedMotif {
                reason: format!("expected {KNOT_SIZE} rows, found {}", rows.len()),
            });
        }

        let mut cells = Array2::from_elem((KNOT_SIZE, KNOT_SIZE), Symbol::Background);

        for (i, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != KNOT_SIZE {
                return Err(KnotError::MalformedMotif {
                    reason: format!("row {i} has {width} glyphs, expected {KNOT_SIZE}"),
                });
            }

            for (j, glyph) in row.chars().enumerate() {
                let symbol = Symbol::from_glyph(glyph).ok_or(KnotError::UnknownSymbol {
                    glyph,
                    row: i,
                    col: j,
                })?;
                if let Some(cell) = cells.get_mut((i, j)) {
                    *cell = symbol;
                }
            }
        }

        Ok(Self { cells })
    }

    /// Symbol at motif cell `(i, j)`, or `None` outside the grid
    pub fn symbol(&self, i: usize, j: usize) -> Option<Symbol> {
        self.cells.get((i, j)).copied()
    }

    /// Quarter-turn variant used on odd-parity tile slots
    ///
    /// `rotated[i][j] = self[j][KNOT_SIZE - 1 - i]`
    #[must_use]
    pub fn rotated(&self) -> Self {
        let n = KNOT_SIZE;
        let cells = Array2::from_shape_fn((n, n), |(i, j)| {
            self.symbol(j, n - 1 - i).unwrap_or(Symbol::Background)
        });
        Self { cells }
    }

    /// Inverse of [`Motif::rotated`]
    ///
    /// `unrotated[i][j] = self[KNOT_SIZE - 1 - j][i]`
    #[must_use]
    pub fn unrotated(&self) -> Self {
        let n = KNOT_SIZE;
        let cells = Array2::from_shape_fn((n, n), |(i, j)| {
            self.symbol(n - 1 - j, i).unwrap_or(Symbol::Background)
        });
        Self { cells }
    }

    /// Iterate over `((i, j), symbol)` for every cell
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Symbol)> + '_ {
        self.cells.indexed_iter().map(|(index, &symbol)| (index, symbol))
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for symbol in row {
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The two read-only motif orientations stamped onto the board
#[derive(Debug, Clone)]
pub struct KnotTemplates {
    base: Motif,
    rotated: Motif,
}

impl KnotTemplates {
    /// Build both orientations from a single base motif
    pub fn from_base(base: Motif) -> Self {
        let rotated = base.rotated();
        Self { base, rotated }
    }

    /// Build both orientations from [`CANONICAL_KNOT`]
    ///
    /// # Errors
    ///
    /// Returns an error if the canonical text fails to parse
    pub fn canonical() -> Result<Self> {
        Motif::parse(CANONICAL_KNOT).map(Self::from_base)
    }

    /// Motif used on even-parity slots
    pub const fn base(&self) -> &Motif {
        &self.base
    }

    /// Motif used on odd-parity slots
    pub const fn rotated(&self) -> &Motif {
        &self.rotated
    }
}
