//! Tile stamping: fills the board with knot motifs in alternating orientations
//!
//! Every slot of the N×N tile grid receives the base motif when `row + col`
//! is even and the rotated motif otherwise. Two stamping paths exist:
//! drawing every motif cell directly, or rendering each orientation once
//! off-board and copying the finished pixel blocks into place. The copy
//! path is only pixel-exact when a tile spans a whole number of pixels.

use log::debug;

use crate::algorithm::hilbert::Depth;
use crate::io::canvas::{Canvas, PixelBlock, PixelCanvas};
use crate::io::configuration::KNOT_SIZE;
use crate::io::error::Result;
use crate::spatial::palette::Palette;
use crate::spatial::symbols::Symbol;
use crate::spatial::tiles::{KnotTemplates, Motif};

/// Which motif variant occupies a tile slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The motif as drawn
    Base,
    /// The motif turned a quarter turn
    Rotated,
}

impl Orientation {
    /// Orientation chosen by checkerboard parity of the slot
    pub const fn for_slot(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Self::Base
        } else {
            Self::Rotated
        }
    }

    /// Template for this orientation
    pub const fn motif(self, templates: &KnotTemplates) -> &Motif {
        match self {
            Self::Base => templates.base(),
            Self::Rotated => templates.rotated(),
        }
    }
}

/// Square grid of tile slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    side: usize,
}

impl TileGrid {
    /// Grid with `side` × `side` slots
    pub const fn new(side: usize) -> Self {
        Self { side }
    }

    /// Grid matching a curve depth, one slot per curve cell
    pub const fn for_depth(depth: Depth) -> Self {
        Self::new(depth.side())
    }

    /// Slots along one side
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Orientation of a slot, or `None` outside the grid
    pub const fn orientation(&self, row: usize, col: usize) -> Option<Orientation> {
        if row < self.side && col < self.side {
            Some(Orientation::for_slot(row, col))
        } else {
            None
        }
    }

    /// Iterate over `(row, col, orientation)` in row-major order
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize, Orientation)> + '_ {
        (0..self.side).flat_map(move |row| {
            (0..self.side).map(move |col| (row, col, Orientation::for_slot(row, col)))
        })
    }
}

/// How tiles are put onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TilingStrategy {
    /// Copy pre-rendered tiles whenever the scale allows it
    #[default]
    Auto,
    /// Draw every motif cell of every tile
    Direct,
    /// Render each orientation once and copy it into every slot
    Copy,
}

impl TilingStrategy {
    /// Settle on `Direct` or `Copy` for a given scale
    pub fn resolve(self, scale: f64) -> Self {
        let whole_pixel_tiles = scale.fract().abs() < f64::EPSILON;
        match self {
            Self::Direct => Self::Direct,
            Self::Auto | Self::Copy if whole_pixel_tiles => Self::Copy,
            Self::Auto | Self::Copy => {
                debug!(
                    "{self:?} tiling at scale {scale} gives fractional tile edges, drawing tiles directly"
                );
                Self::Direct
            }
        }
    }
}

/// Both orientations rendered off-board at full tile resolution
#[derive(Debug, Clone)]
struct PrerenderedTiles {
    base: PixelBlock,
    rotated: PixelBlock,
    tile_pixels: u32,
}

impl PrerenderedTiles {
    fn new(templates: &KnotTemplates, palette: &Palette, scale: f64) -> Self {
        let tile_pixels = (KNOT_SIZE as f64 * scale).round() as u32;
        let render = |motif: &Motif| {
            let mut canvas = PixelCanvas::new(
                tile_pixels,
                tile_pixels,
                palette.color(Symbol::Background),
            );
            draw_motif(&mut canvas, motif, palette, [0.0, 0.0], scale);
            canvas.into_image()
        };

        Self {
            base: render(templates.base()),
            rotated: render(templates.rotated()),
            tile_pixels,
        }
    }

    const fn block(&self, orientation: Orientation) -> &PixelBlock {
        match orientation {
            Orientation::Base => &self.base,
            Orientation::Rotated => &self.rotated,
        }
    }
}

/// Stamps motif tiles onto a canvas
pub struct TileStamper<'a> {
    templates: &'a KnotTemplates,
    palette: &'a Palette,
    scale: f64,
    prerendered: Option<PrerenderedTiles>,
}

impl<'a> TileStamper<'a> {
    /// Prepare a stamper, pre-rendering both orientations when copying
    pub fn new(
        templates: &'a KnotTemplates,
        palette: &'a Palette,
        scale: f64,
        strategy: TilingStrategy,
    ) -> Self {
        let prerendered = (strategy.resolve(scale) == TilingStrategy::Copy)
            .then(|| PrerenderedTiles::new(templates, palette, scale));

        Self {
            templates,
            palette,
            scale,
            prerendered,
        }
    }

    /// The resolved strategy, `Direct` or `Copy`
    pub const fn strategy(&self) -> TilingStrategy {
        if self.prerendered.is_some() {
            TilingStrategy::Copy
        } else {
            TilingStrategy::Direct
        }
    }

    /// Stamp the tile for one slot
    ///
    /// # Errors
    ///
    /// Returns an error if a copied tile does not fit on the canvas
    pub fn stamp_tile<C: Canvas>(&self, canvas: &mut C, row: usize, col: usize) -> Result<()> {
        let orientation = Orientation::for_slot(row, col);

        match &self.prerendered {
            Some(tiles) => canvas.write_block(
                tiles.block(orientation),
                col as u32 * tiles.tile_pixels,
                row as u32 * tiles.tile_pixels,
            ),
            None => {
                let origin = [(col * KNOT_SIZE) as f64, (row * KNOT_SIZE) as f64];
                draw_motif(
                    canvas,
                    orientation.motif(self.templates),
                    self.palette,
                    origin,
                    self.scale,
                );
                Ok(())
            }
        }
    }

    /// Stamp every slot of one grid row
    ///
    /// # Errors
    ///
    /// Returns an error if a copied tile does not fit on the canvas
    pub fn stamp_row<C: Canvas>(&self, canvas: &mut C, grid: &TileGrid, row: usize) -> Result<()> {
        for col in 0..grid.side() {
            self.stamp_tile(canvas, row, col)?;
        }
        Ok(())
    }

    /// Stamp the whole grid
    ///
    /// # Errors
    ///
    /// Returns an error if a copied tile does not fit on the canvas
    pub fn stamp_all<C: Canvas>(&self, canvas: &mut C, grid: &TileGrid) -> Result<()> {
        for row in 0..grid.side() {
            self.stamp_row(canvas, grid, row)?;
        }
        Ok(())
    }
}

/// Draw one motif cell by cell with its top-left corner at a board position
pub fn draw_motif<C: Canvas>(
    canvas: &mut C,
    motif: &Motif,
    palette: &Palette,
    origin: [f64; 2],
    scale: f64,
) {
    for ((i, j), symbol) in motif.cells() {
        canvas.fill_rect(
            palette.color(symbol),
            (origin[0] + i as f64) * scale,
            (origin[1] + j as f64) * scale,
            scale,
            scale,
        );
    }
}
