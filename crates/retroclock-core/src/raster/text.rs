use super::*;

/// Accounting for a drawn run of characters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextOutcome {
    pub drawn: usize,
    pub skipped: usize,
    pub rects: usize,
    /// Horizontal pen movement in pixels, trailing spacing included.
    pub advance: i32,
}

/// Draws `text` left to right starting at `x`, `y`.
///
/// Each character occupies a cell of `columns + spacing` logical pixels.
/// Unsupported characters leave their cell blank. A bad scale is rejected
/// before the first glyph so a failed call draws nothing.
#[allow(
    clippy::too_many_arguments,
    reason = "mirrors draw_scaled_glyph with the extra spacing parameter"
)]
pub fn draw_scaled_text<S: Surface>(
    surface: &mut S,
    table: &GlyphTable,
    x: i32,
    y: i32,
    text: &str,
    scale: i32,
    spacing: i32,
    color: S::Color,
) -> Result<TextOutcome, RasterError> {
    let scale = check_scale(scale)?;
    let cell = cell_advance(table, scale, spacing);
    let mut outcome = TextOutcome::default();

    for c in text.chars() {
        let pen_x = x.saturating_add(outcome.advance);
        match draw_scaled_glyph(surface, table, pen_x, y, c, scale, color)? {
            DrawOutcome::Drawn { rects } => {
                outcome.drawn += 1;
                outcome.rects += rects;
            }
            DrawOutcome::Skipped(_) => outcome.skipped += 1,
        }
        outcome.advance = outcome.advance.saturating_add(cell);
    }

    Ok(outcome)
}

/// Pixel width of `text`, excluding the spacing after the last character.
pub fn text_pixel_width(
    table: &GlyphTable,
    text: &str,
    scale: i32,
    spacing: i32,
) -> Result<i32, RasterError> {
    let scale = check_scale(scale)?;
    let count = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    if count == 0 {
        return Ok(0);
    }

    let spacing = spacing.max(0);
    let columns = table.columns() as i32;
    Ok(count
        .saturating_mul(columns)
        .saturating_add((count - 1).saturating_mul(spacing))
        .saturating_mul(scale))
}

fn cell_advance(table: &GlyphTable, scale: i32, spacing: i32) -> i32 {
    (table.columns() as i32)
        .saturating_add(spacing.max(0))
        .saturating_mul(scale)
}
