//! Glyph tables, including the built-in retro digit font.

use crate::{
    glyph::{GLYPH_COLUMNS, Glyph, MAX_GLYPH_ROWS},
    raster::{self, DrawOutcome, RasterError},
    surface::Surface,
};

/// Immutable mapping from supported characters to glyphs.
///
/// Every glyph in a table shares the same column count and row depth.
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable {
    rows: u8,
    entries: &'static [(char, Glyph)],
}

impl GlyphTable {
    /// Creates a table whose glyphs are `rows` pixels tall.
    ///
    /// `rows` is clamped into `1..=8`, the depth a column byte can encode.
    pub const fn new(rows: u8, entries: &'static [(char, Glyph)]) -> Self {
        let rows = if rows == 0 {
            1
        } else if rows > MAX_GLYPH_ROWS {
            MAX_GLYPH_ROWS
        } else {
            rows
        };

        Self { rows, entries }
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        GLYPH_COLUMNS
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the glyph for `c`.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, glyph)| glyph)
    }

    pub fn supports(&self, c: char) -> bool {
        self.glyph(c).is_some()
    }

    /// Supported characters in table order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(symbol, _)| *symbol)
    }

    /// Pixel size of one glyph cell at `scale`.
    pub fn glyph_size(&self, scale: i32) -> Result<(i32, i32), RasterError> {
        let scale = raster::check_scale(scale)?;
        Ok((
            (GLYPH_COLUMNS as i32).saturating_mul(scale),
            i32::from(self.rows).saturating_mul(scale),
        ))
    }

    /// Draws `c` with its top-left corner at `x`, `y`.
    pub fn draw_scaled<S: Surface>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        c: char,
        scale: i32,
        color: S::Color,
    ) -> Result<DrawOutcome, RasterError> {
        raster::draw_scaled_glyph(surface, self, x, y, c, scale, color)
    }
}

/// Retro digit font used by the clock face.
///
/// Glyphs use all eight rows of the column byte.
pub static RETRO_DIGITS: GlyphTable = GlyphTable::new(8, &RETRO_DIGIT_GLYPHS);

static RETRO_DIGIT_GLYPHS: [(char, Glyph); 10] = [
    ('0', Glyph::new([0x7E, 0x81, 0x81, 0x81, 0x7E])),
    ('1', Glyph::new([0x00, 0x42, 0xFF, 0x02, 0x00])),
    ('2', Glyph::new([0xC2, 0xA1, 0x91, 0x89, 0x86])),
    ('3', Glyph::new([0x42, 0x81, 0x89, 0x89, 0x76])),
    ('4', Glyph::new([0x18, 0x14, 0x12, 0xFF, 0x10])),
    ('5', Glyph::new([0x4F, 0x89, 0x89, 0x89, 0x71])),
    ('6', Glyph::new([0x7C, 0x8A, 0x89, 0x89, 0x70])),
    ('7', Glyph::new([0x01, 0xE1, 0x19, 0x05, 0x03])),
    ('8', Glyph::new([0x76, 0x89, 0x89, 0x89, 0x76])),
    ('9', Glyph::new([0x0E, 0x91, 0x91, 0x51, 0x3E])),
];
