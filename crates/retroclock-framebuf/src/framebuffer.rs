//! In-memory RGB565 framebuffer.

/// `W x H` framebuffer of RGB565 words, row-major.
///
/// Panels take pixels big-endian over SPI; [`FrameBuffer::line_bytes_be`]
/// produces that wire order for one line.
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[u16; W]; H],
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Bytes in one big-endian line payload.
    pub const LINE_BYTES: usize = W * 2;

    /// Creates a black framebuffer.
    pub const fn new() -> Self {
        Self {
            pixels: [[0u16; W]; H],
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Fills the whole buffer with `color`.
    pub fn clear(&mut self, color: u16) {
        for row in self.pixels.iter_mut() {
            row.fill(color);
        }
    }

    /// Sets one pixel.
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u16) -> bool {
        if x >= W || y >= H {
            return false;
        }

        self.pixels[y][x] = color;
        true
    }

    /// Reads one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= W || y >= H {
            return None;
        }

        Some(self.pixels[y][x])
    }

    /// Fills a rectangle, clipped to the buffer.
    ///
    /// Zero or negative sizes are ignored. Returns the number of pixels
    /// written.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u16) -> usize {
        if width <= 0 || height <= 0 {
            return 0;
        }

        let x0 = clamp_axis(x as i64, W);
        let y0 = clamp_axis(y as i64, H);
        let x1 = clamp_axis(x as i64 + width as i64, W);
        let y1 = clamp_axis(y as i64 + height as i64, H);
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }

        for row in &mut self.pixels[y0..y1] {
            row[x0..x1].fill(color);
        }

        (x1 - x0) * (y1 - y0)
    }

    /// Returns the pixels of line `y`.
    pub fn line(&self, y: usize) -> Option<&[u16; W]> {
        self.pixels.get(y)
    }

    /// Writes line `y` into `out` as big-endian RGB565.
    ///
    /// Returns the number of bytes written, or `None` when `y` is out of
    /// range or `out` is shorter than [`Self::LINE_BYTES`].
    pub fn line_bytes_be(&self, y: usize, out: &mut [u8]) -> Option<usize> {
        let line = self.pixels.get(y)?;
        let out = out.get_mut(..Self::LINE_BYTES)?;

        for (chunk, pixel) in out.chunks_exact_mut(2).zip(line.iter()) {
            chunk.copy_from_slice(&pixel.to_be_bytes());
        }

        Some(Self::LINE_BYTES)
    }

    /// Counts pixels that differ from `background`.
    pub fn count_not(&self, background: u16) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|pixel| **pixel != background)
            .count()
    }
}

fn clamp_axis(value: i64, len: usize) -> usize {
    value.clamp(0, len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small = FrameBuffer<16, 8>;

    #[test]
    fn set_and_read_last_pixel() {
        let mut fb = Small::new();

        assert!(fb.set_pixel(15, 7, 0xF800));
        assert_eq!(fb.pixel(15, 7), Some(0xF800));
        assert_eq!(fb.pixel(16, 8), None);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = Small::new();

        assert!(!fb.set_pixel(16, 0, 0xFFFF));
        assert!(!fb.set_pixel(0, 8, 0xFFFF));
        assert_eq!(fb.count_not(0), 0);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = Small::new();

        assert_eq!(fb.fill_rect(-3, -3, 5, 5, 0x07E0), 4);
        assert_eq!(fb.fill_rect(14, 6, 10, 10, 0x07E0), 4);
        assert_eq!(fb.count_not(0), 8);
        assert_eq!(fb.pixel(1, 1), Some(0x07E0));
        assert_eq!(fb.pixel(2, 2), Some(0));
        assert_eq!(fb.pixel(15, 7), Some(0x07E0));
    }

    #[test]
    fn degenerate_and_offscreen_fills_write_nothing() {
        let mut fb = Small::new();

        assert_eq!(fb.fill_rect(2, 2, 0, 4, 0xFFFF), 0);
        assert_eq!(fb.fill_rect(2, 2, 4, -1, 0xFFFF), 0);
        assert_eq!(fb.fill_rect(100, 2, 4, 4, 0xFFFF), 0);
        assert_eq!(fb.fill_rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 0xFFFF), 0);
        assert_eq!(fb.count_not(0), 0);
    }

    #[test]
    fn huge_fill_covers_everything_without_overflow() {
        let mut fb = Small::new();

        assert_eq!(fb.fill_rect(-1, -1, i32::MAX, i32::MAX, 0x001F), 16 * 8);
        assert_eq!(fb.count_not(0x001F), 0);
    }

    #[test]
    fn line_payload_is_big_endian() {
        let mut fb = Small::new();
        fb.set_pixel(0, 3, 0xF81F);
        fb.set_pixel(15, 3, 0x1234);

        let mut out = [0u8; Small::LINE_BYTES];
        assert_eq!(fb.line_bytes_be(3, &mut out), Some(32));
        assert_eq!(&out[..2], &[0xF8, 0x1F]);
        assert_eq!(&out[30..], &[0x12, 0x34]);

        let mut short = [0u8; 4];
        assert_eq!(fb.line_bytes_be(3, &mut short), None);
        assert_eq!(fb.line_bytes_be(8, &mut out), None);
    }

    #[test]
    fn clear_and_line_access() {
        let mut fb = Small::new();
        fb.clear(0xAAAA);

        assert_eq!(fb.line(0).map(|line| line[5]), Some(0xAAAA));
        assert!(fb.line(8).is_none());
        assert_eq!(fb.count_not(0xAAAA), 0);
    }
}
