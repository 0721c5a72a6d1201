use heapless::Vec;

use super::{FillRect, Surface};

/// Surface that records every fill instead of drawing it.
///
/// Holds up to `N` calls; anything beyond that is dropped and flagged.
#[derive(Debug, Clone)]
pub struct RecordingSurface<C, const N: usize> {
    rects: Vec<FillRect<C>, N>,
    overflowed: bool,
}

impl<C, const N: usize> Default for RecordingSurface<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> RecordingSurface<C, N> {
    pub const fn new() -> Self {
        Self {
            rects: Vec::new(),
            overflowed: false,
        }
    }

    /// Recorded calls in issue order.
    pub fn rects(&self) -> &[FillRect<C>] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Whether calls were dropped because the recorder was full.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.overflowed = false;
    }

    /// Smallest `(x, y, width, height)` box covering every recorded fill.
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        let first = self.rects.first()?;
        let (mut left, mut top) = (first.x, first.y);
        let (mut right, mut bottom) = (first.right(), first.bottom());

        for rect in self.rects.iter().skip(1) {
            left = left.min(rect.x);
            top = top.min(rect.y);
            right = right.max(rect.right());
            bottom = bottom.max(rect.bottom());
        }

        Some((left, top, right - left, bottom - top))
    }
}

impl<C: Copy, const N: usize> Surface for RecordingSurface<C, N> {
    type Color = C;

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: C) {
        let rect = FillRect {
            x,
            y,
            width,
            height,
            color,
        };

        if self.rects.push(rect).is_err() {
            self.overflowed = true;
        }
    }
}
