//! Knot compositor: tiles the board and stitches it along a Hilbert path
//!
//! A render runs in two phases over a fresh canvas. Tiles are stamped row
//! by row, then a connector is painted over every step of the traversal
//! path. The motif templates and palette are built once per compositor and
//! shared read-only by every render. A render that fails returns no image,
//! so output from an earlier render is never partially overwritten.

use image::RgbaImage;
use log::{debug, info};

use crate::algorithm::hilbert::{Depth, HilbertPath};
use crate::algorithm::stitching::stitch;
use crate::algorithm::tiling::{TileGrid, TileStamper, TilingStrategy};
use crate::io::canvas::PixelCanvas;
use crate::io::configuration::{KNOT_SIZE, MAX_RENDER_DEPTH, MAX_SCALE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::palette::Palette;
use crate::spatial::symbols::Symbol;
use crate::spatial::tiles::KnotTemplates;

/// Validated per-render inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    depth: Depth,
    scale: f64,
}

impl RenderParams {
    /// Validate depth and scale for rendering
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `depth` exceeds [`MAX_RENDER_DEPTH`]
    /// - `scale` is not finite, not positive, or above [`MAX_SCALE`]
    /// - the resulting image would be less than one pixel wide
    pub fn new(depth: Depth, scale: f64) -> Result<Self> {
        if depth.get() > MAX_RENDER_DEPTH {
            return Err(invalid_parameter(
                "depth",
                &depth.get(),
                &format!("rendering supports depths up to {MAX_RENDER_DEPTH}"),
            ));
        }

        if !scale.is_finite() || scale <= 0.0 || scale > MAX_SCALE {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &format!("must be positive and at most {MAX_SCALE}"),
            ));
        }

        let params = Self { depth, scale };
        if params.side_pixels() == 0 {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &"image would be smaller than one pixel",
            ));
        }

        Ok(params)
    }

    /// Convenience constructor from a signed depth
    ///
    /// # Errors
    ///
    /// Returns an error if the depth is negative or either value fails
    /// [`RenderParams::new`] validation
    pub fn from_signed(depth: i64, scale: f64) -> Result<Self> {
        Self::new(Depth::try_from(depth)?, scale)
    }

    /// Recursion depth
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Device pixels per board unit
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Tiles along one side, `2^depth`
    pub const fn tiles_per_side(&self) -> usize {
        self.depth.side()
    }

    /// Side length of the output image, `floor(2^depth * 27 * scale)`
    pub fn side_pixels(&self) -> u32 {
        ((self.tiles_per_side() * KNOT_SIZE) as f64 * self.scale).floor() as u32
    }
}

/// Finished render
#[derive(Debug, Clone)]
pub struct Rendering {
    /// Parameters the image was rendered with
    pub params: RenderParams,
    /// Strategy actually used for tiling
    pub strategy: TilingStrategy,
    /// Number of connector junctions painted
    pub connectors: usize,
    /// The composited, fully opaque image
    pub image: RgbaImage,
}

/// Owns the read-only templates and palette shared by all renders
#[derive(Debug, Clone)]
pub struct KnotCompositor {
    templates: KnotTemplates,
    palette: Palette,
    strategy: TilingStrategy,
}

impl KnotCompositor {
    /// Build the canonical templates and bind them to a palette
    ///
    /// # Errors
    ///
    /// Returns an error if the canonical motif fails to parse
    pub fn new(palette: Palette) -> Result<Self> {
        Ok(Self::with_templates(KnotTemplates::canonical()?, palette))
    }

    /// Compositor over caller-supplied templates
    pub const fn with_templates(templates: KnotTemplates, palette: Palette) -> Self {
        Self {
            templates,
            palette,
            strategy: TilingStrategy::Auto,
        }
    }

    /// Choose how tiles are stamped
    #[must_use]
    pub const fn with_strategy(mut self, strategy: TilingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The motif templates
    pub const fn templates(&self) -> &KnotTemplates {
        &self.templates
    }

    /// The color table
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Start an incremental render
    pub fn begin(&self, params: RenderParams) -> RenderSession<'_> {
        let path = HilbertPath::generate(params.depth());
        debug!(
            "depth {} path has {} points, {} steps",
            params.depth().get(),
            path.len(),
            path.len().saturating_sub(1)
        );

        let side = params.side_pixels();
        let canvas = PixelCanvas::new(side, side, self.palette.color(Symbol::Background));
        let stamper = TileStamper::new(&self.templates, &self.palette, params.scale(), self.strategy);
        debug!("tiling with {:?} strategy", stamper.strategy());

        RenderSession {
            palette: &self.palette,
            params,
            grid: TileGrid::for_depth(params.depth()),
            path,
            stamper,
            canvas,
            next_row: 0,
        }
    }

    /// Render in one call
    ///
    /// # Errors
    ///
    /// Returns an error if stamping or stitching fails
    pub fn render(&self, params: RenderParams) -> Result<Rendering> {
        self.begin(params).finish()
    }
}

/// A render in progress, owning its canvas and traversal path
pub struct RenderSession<'a> {
    palette: &'a Palette,
    params: RenderParams,
    grid: TileGrid,
    path: HilbertPath,
    stamper: TileStamper<'a>,
    canvas: PixelCanvas,
    next_row: usize,
}

impl RenderSession<'_> {
    /// Number of tile rows to stamp
    pub const fn tile_rows(&self) -> usize {
        self.grid.side()
    }

    /// Rows stamped so far
    pub const fn rows_done(&self) -> usize {
        self.next_row
    }

    /// The traversal path this render stitches along
    pub const fn path(&self) -> &HilbertPath {
        &self.path
    }

    /// Stamp the next tile row; returns `false` once every row is done
    ///
    /// # Errors
    ///
    /// Returns an error if a copied tile does not fit on the canvas
    pub fn stamp_next_row(&mut self) -> Result<bool> {
        if self.next_row >= self.grid.side() {
            return Ok(false);
        }
        self.stamper
            .stamp_row(&mut self.canvas, &self.grid, self.next_row)?;
        self.next_row += 1;
        Ok(true)
    }

    /// Stamp any remaining rows, stitch connectors and hand back the image
    ///
    /// # Errors
    ///
    /// Returns an error if stamping fails or the path contains a step that
    /// is not a unit axis-aligned move
    pub fn finish(mut self) -> Result<Rendering> {
        while self.stamp_next_row()? {}

        let connectors = stitch(
            &mut self.canvas,
            &self.path,
            self.palette,
            self.params.scale(),
        )?;

        info!(
            "rendered {side}x{side} px: {tiles} tiles, {connectors} connectors",
            side = self.params.side_pixels(),
            tiles = self.grid.side() * self.grid.side(),
        );

        Ok(Rendering {
            params: self.params,
            strategy: self.stamper.strategy(),
            connectors,
            image: self.canvas.into_image(),
        })
    }
}
