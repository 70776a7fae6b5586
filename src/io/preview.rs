//! Terminal preview using 24-bit color half-block characters
//!
//! Every character cell shows two vertically stacked samples: the upper
//! one as the foreground of `▀` and the lower one as the background.

use image::{Rgba, RgbaImage};
use std::io::Write;

use crate::io::error::{Result, invalid_parameter, output_error};

const UPPER_HALF_BLOCK: char = '▀';
const RESET: &str = "\x1b[0m";

/// Sampling step so the preview is at most `columns` characters wide
pub const fn sample_step(width: u32, columns: u32) -> u32 {
    if columns == 0 || width <= columns {
        1
    } else {
        width.div_ceil(columns)
    }
}

/// Write a nearest-neighbour downsampled preview of `image`
///
/// # Errors
///
/// Returns an error if `columns` is zero or writing to `out` fails
pub fn write_preview<W: Write>(image: &RgbaImage, columns: u32, out: &mut W) -> Result<()> {
    if columns == 0 {
        return Err(invalid_parameter(
            "columns",
            &columns,
            &"preview needs at least one column",
        ));
    }

    let (width, height) = image.dimensions();
    let step = sample_step(width, columns);

    let mut y = 0;
    while y < height {
        let mut line = String::new();
        let mut x = 0;
        while x < width {
            let upper = sample(image, x, y);
            let lower = image.get_pixel_checked(x, y + step).copied();
            line.push_str(&cell(upper, lower));
            x += step;
        }
        line.push_str(RESET);
        writeln!(out, "{line}").map_err(|e| output_error("write preview", e))?;
        y += step * 2;
    }

    out.flush().map_err(|e| output_error("flush preview", e))
}

fn sample(image: &RgbaImage, x: u32, y: u32) -> Rgba<u8> {
    image
        .get_pixel_checked(x, y)
        .copied()
        .unwrap_or(Rgba([0, 0, 0, 0xff]))
}

fn cell(upper: Rgba<u8>, lower: Option<Rgba<u8>>) -> String {
    let Rgba([r, g, b, _]) = upper;
    match lower {
        Some(Rgba([lr, lg, lb, _])) => {
            format!("\x1b[38;2;{r};{g};{b}m\x1b[48;2;{lr};{lg};{lb}m{UPPER_HALF_BLOCK}")
        }
        None => format!("{RESET}\x1b[38;2;{r};{g};{b}m{UPPER_HALF_BLOCK}"),
    }
}
