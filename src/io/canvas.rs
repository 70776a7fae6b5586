//! Raster drawing surface backed by an RGBA image buffer

use image::{Rgba, RgbaImage, imageops};
use std::ops::Range;

use crate::io::error::{KnotError, Result};

/// Rectangular block of pixels copied between canvases
pub type PixelBlock = RgbaImage;

/// Drawing surface consumed by the compositor
///
/// Coordinates passed to [`Canvas::fill_rect`] are device pixels and may be
/// fractional. Block operations work on whole pixels and copy verbatim.
pub trait Canvas {
    /// Canvas size as `(width, height)` in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Paint an axis-aligned rectangle, clipped to the canvas
    fn fill_rect(&mut self, color: Rgba<u8>, x: f64, y: f64, width: f64, height: f64);

    /// Copy out a rectangular region
    ///
    /// # Errors
    ///
    /// Returns an error if the region does not lie entirely within the canvas
    fn read_block(&self, x: u32, y: u32, width: u32, height: u32) -> Result<PixelBlock>;

    /// Paste a block with its top-left corner at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns an error if the block does not fit entirely within the canvas
    fn write_block(&mut self, block: &PixelBlock, x: u32, y: u32) -> Result<()>;
}

/// In-memory opaque canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    image: RgbaImage,
}

impl PixelCanvas {
    /// Create a canvas filled with a single color
    pub fn new(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, fill),
        }
    }

    /// Color of a single pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas and return the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn check_region(
        &self,
        operation: &'static str,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let (canvas_width, canvas_height) = self.dimensions();
        let fits_x = x.checked_add(width).is_some_and(|end| end <= canvas_width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= canvas_height);

        if fits_x && fits_y {
            Ok(())
        } else {
            Err(KnotError::BlockOutOfBounds {
                operation,
                x,
                y,
                width,
                height,
                canvas: (canvas_width, canvas_height),
            })
        }
    }
}

impl Canvas for PixelCanvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, color: Rgba<u8>, x: f64, y: f64, width: f64, height: f64) {
        let (canvas_width, canvas_height) = self.dimensions();
        let columns = covered_pixels(x, width, canvas_width);
        let rows = covered_pixels(y, height, canvas_height);

        for py in rows {
            for px in columns.clone() {
                if let Some(pixel) = self.image.get_pixel_mut_checked(px, py) {
                    *pixel = color;
                }
            }
        }
    }

    fn read_block(&self, x: u32, y: u32, width: u32, height: u32) -> Result<PixelBlock> {
        self.check_region("read block", x, y, width, height)?;
        Ok(imageops::crop_imm(&self.image, x, y, width, height).to_image())
    }

    fn write_block(&mut self, block: &PixelBlock, x: u32, y: u32) -> Result<()> {
        self.check_region("write block", x, y, block.width(), block.height())?;
        imageops::replace(&mut self.image, block, i64::from(x), i64::from(y));
        Ok(())
    }
}

/// Pixels along one axis whose centers fall inside `[start, start + extent)`
///
/// Using pixel centers makes abutting rectangles partition pixels exactly,
/// so fractional cell sizes never leave gaps or double-cover a pixel.
pub fn covered_pixels(start: f64, extent: f64, limit: u32) -> Range<u32> {
    if !start.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0..0;
    }

    let first = (start - 0.5).ceil().max(0.0);
    let end = (start + extent - 0.5).ceil().min(f64::from(limit));

    if end <= first {
        0..0
    } else {
        (first as u32)..(end as u32)
    }
}
