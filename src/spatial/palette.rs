//! Immutable color table binding each motif category to an RGBA color

use image::Rgba;

use crate::io::error::{KnotError, Result};
use crate::spatial::symbols::Symbol;

/// Color bound to every motif category
///
/// Built once and passed by reference to everything that paints. The table
/// is indexed by [`Symbol::index`] so every category always has a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba<u8>; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                Rgba([0xcc, 0xdd, 0xff, 0xff]), // light blue
                Rgba([0x00, 0x00, 0x00, 0xff]), // black
                Rgba([0xff, 0xcc, 0x00, 0xff]), // amber
                Rgba([0xff, 0x00, 0x00, 0xff]), // red
            ],
        }
    }
}

impl Palette {
    /// Color painted for a category
    pub fn color(&self, symbol: Symbol) -> Rgba<u8> {
        self.colors
            .get(symbol.index())
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0xff]))
    }

    /// Return a copy of this palette with one category recolored
    #[must_use]
    pub fn with_color(mut self, symbol: Symbol, color: Rgba<u8>) -> Self {
        if let Some(slot) = self.colors.get_mut(symbol.index()) {
            *slot = color;
        }
        self
    }

    /// Apply a sequence of `(category, color)` overrides on top of this palette
    #[must_use]
    pub fn with_overrides<'a, I>(self, overrides: I) -> Self
    where
        I: IntoIterator<Item = &'a ColorOverride>,
    {
        overrides
            .into_iter()
            .fold(self, |palette, entry| palette.with_color(entry.symbol, entry.color))
    }
}

/// A single palette override, written `GLYPH=HEX` on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOverride {
    /// Category being recolored
    pub symbol: Symbol,
    /// Replacement color
    pub color: Rgba<u8>,
}

impl std::str::FromStr for ColorOverride {
    type Err = KnotError;

    fn from_str(text: &str) -> Result<Self> {
        let (glyph_text, hex) = text.split_once('=').ok_or_else(|| KnotError::InvalidColor {
            value: text.to_string(),
            reason: "expected GLYPH=HEX, e.g. '~=#fc0'".to_string(),
        })?;

        let mut glyphs = glyph_text.chars();
        let glyph = match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => glyph,
            _ => {
                return Err(KnotError::InvalidColor {
                    value: text.to_string(),
                    reason: "category must be a single glyph".to_string(),
                });
            }
        };

        let symbol = Symbol::from_glyph(glyph).ok_or_else(|| KnotError::InvalidColor {
            value: text.to_string(),
            reason: "unknown category glyph".to_string(),
        })?;

        Ok(Self {
            symbol,
            color: parse_hex_color(hex)?,
        })
    }
}

/// Parse a `#rgb` or `#rrggbb` color into an opaque RGBA value
///
/// # Errors
///
/// Returns an error if the text lacks the leading `#`, has the wrong number
/// of digits, or contains non-hexadecimal characters
pub fn parse_hex_color(text: &str) -> Result<Rgba<u8>> {
    let invalid = |reason: &str| KnotError::InvalidColor {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| invalid("missing leading '#'"))?;

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| invalid("contains non-hexadecimal digits"))?;

    let channels: Vec<u8> = match nibbles.len() {
        3 => nibbles.iter().map(|&n| n * 0x11).collect(),
        6 => nibbles.chunks(2).map(|pair| pair.iter().fold(0, |acc, &n| acc * 16 + n)).collect(),
        _ => return Err(invalid("expected 3 or 6 hexadecimal digits")),
    };

    match channels.as_slice() {
        [r, g, b] => Ok(Rgba([*r, *g, *b, 0xff])),
        _ => Err(invalid("expected 3 or 6 hexadecimal digits")),
    }
}
