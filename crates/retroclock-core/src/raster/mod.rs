//! Scaled glyph rasterization.
//!
//! Every lit glyph pixel becomes one `scale x scale` filled rectangle. Columns
//! are walked left to right and rows top to bottom, so the rectangle sequence
//! for a given call is always the same.

use core::fmt;

use log::{debug, warn};

use crate::{
    font::GlyphTable,
    glyph::{GLYPH_COLUMNS, Glyph},
    surface::Surface,
};

mod text;

pub use self::text::{TextOutcome, draw_scaled_text, text_pixel_width};

/// Rasterization failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RasterError {
    /// Scale factor was zero or negative; nothing was drawn.
    InvalidScale(i32),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale(scale) => write!(f, "invalid glyph scale {scale}"),
        }
    }
}

/// Why a draw emitted nothing without failing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    UnsupportedCharacter(char),
}

/// Result of a successful glyph draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawOutcome {
    /// The glyph was found; `rects` rectangles were issued.
    Drawn { rects: usize },
    /// Nothing was issued to the surface.
    Skipped(SkipReason),
}

impl DrawOutcome {
    pub const fn rects(&self) -> usize {
        match self {
            Self::Drawn { rects } => *rects,
            Self::Skipped(_) => 0,
        }
    }

    pub const fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

/// Validates a scale factor.
pub fn check_scale(scale: i32) -> Result<i32, RasterError> {
    if scale <= 0 {
        warn!("rejecting glyph scale {}", scale);
        return Err(RasterError::InvalidScale(scale));
    }

    Ok(scale)
}

/// Draws `c` from `table` with its top-left corner at `x`, `y`.
///
/// The scale is checked before the table lookup, so a bad scale reports
/// [`RasterError::InvalidScale`] even for an unsupported character. Neither
/// path touches the surface. No bounds checking happens here; the surface is
/// expected to clip.
pub fn draw_scaled_glyph<S: Surface>(
    surface: &mut S,
    table: &GlyphTable,
    x: i32,
    y: i32,
    c: char,
    scale: i32,
    color: S::Color,
) -> Result<DrawOutcome, RasterError> {
    let scale = check_scale(scale)?;

    let Some(glyph) = table.glyph(c) else {
        debug!("no glyph for {:?}; skipping", c);
        return Ok(DrawOutcome::Skipped(SkipReason::UnsupportedCharacter(c)));
    };

    let rects = fill_glyph(surface, glyph, table.rows(), x, y, scale, color);
    Ok(DrawOutcome::Drawn { rects })
}

/// Issues one rectangle per lit pixel. `scale` must already be validated.
fn fill_glyph<S: Surface>(
    surface: &mut S,
    glyph: &Glyph,
    rows: u8,
    x: i32,
    y: i32,
    scale: i32,
    color: S::Color,
) -> usize {
    let mut rects = 0usize;

    for col in 0..GLYPH_COLUMNS {
        let px = x.saturating_add((col as i32).saturating_mul(scale));
        for row in 0..rows {
            if glyph.is_set(row, col) {
                let py = y.saturating_add(i32::from(row).saturating_mul(scale));
                surface.fill_rect(px, py, scale, scale, color);
                rects += 1;
            }
        }
    }

    rects
}
