//! Column-encoded bitmap glyphs.

/// Columns in every glyph of a table.
pub const GLYPH_COLUMNS: usize = 5;
/// Deepest row a column mask can encode.
pub const MAX_GLYPH_ROWS: u8 = 8;

/// One displayable character as a 5-column bitmap.
///
/// Each column is a bitmask read from least to most significant bit, so bit 0
/// is the top row. How many rows are meaningful is decided by the owning
/// [`GlyphTable`](crate::font::GlyphTable).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    columns: [u8; GLYPH_COLUMNS],
}

/// Tight bounds of the lit pixels of a glyph, all edges inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InkBounds {
    pub left: usize,
    pub right: usize,
    pub top: u8,
    pub bottom: u8,
}

impl InkBounds {
    pub const fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub const fn height(&self) -> u8 {
        self.bottom - self.top + 1
    }
}

impl Glyph {
    pub const BLANK: Self = Self::new([0; GLYPH_COLUMNS]);

    pub const fn new(columns: [u8; GLYPH_COLUMNS]) -> Self {
        Self { columns }
    }

    /// Raw column masks, left to right.
    pub const fn columns(&self) -> &[u8; GLYPH_COLUMNS] {
        &self.columns
    }

    /// Returns whether the pixel at `row`, `column` is lit.
    ///
    /// Out-of-range coordinates read as unlit.
    pub const fn is_set(&self, row: u8, column: usize) -> bool {
        if row >= MAX_GLYPH_ROWS || column >= GLYPH_COLUMNS {
            return false;
        }

        (self.columns[column] >> row) & 1 != 0
    }

    /// Number of lit pixels within the first `rows` rows.
    pub fn lit_count(&self, rows: u8) -> usize {
        let mask = row_mask(rows);
        self.columns
            .iter()
            .map(|bits| (bits & mask).count_ones() as usize)
            .sum()
    }

    /// Bounds of the lit pixels within the first `rows` rows.
    ///
    /// Returns `None` for a glyph with nothing lit.
    pub fn ink_bounds(&self, rows: u8) -> Option<InkBounds> {
        let mask = row_mask(rows);
        let mut left = GLYPH_COLUMNS;
        let mut right = 0usize;
        let mut union = 0u8;

        for (col, bits) in self.columns.iter().enumerate() {
            let bits = bits & mask;
            if bits != 0 {
                left = left.min(col);
                right = right.max(col);
                union |= bits;
            }
        }

        if union == 0 {
            return None;
        }

        Some(InkBounds {
            left,
            right,
            top: union.trailing_zeros() as u8,
            bottom: (7 - union.leading_zeros()) as u8,
        })
    }
}

pub(crate) const fn row_mask(rows: u8) -> u8 {
    if rows >= MAX_GLYPH_ROWS {
        0xFF
    } else {
        (1u8 << rows) - 1
    }
}
