//! Drawing surface abstraction.

#[cfg(feature = "embedded-graphics")]
mod graphics;
mod recording;

#[cfg(feature = "embedded-graphics")]
pub use self::graphics::GraphicsSurface;
pub use self::recording::RecordingSurface;

/// Pixel target exposing a filled-rectangle primitive.
///
/// Implementations must tolerate rectangles that lie partly or entirely
/// outside their visible area, and zero or negative sizes. Such fills are
/// clipped or ignored, never reported.
pub trait Surface {
    /// Color value, forwarded verbatim by every drawing routine.
    type Color: Copy;

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Self::Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Color = S::Color;

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Self::Color) {
        (**self).fill_rect(x, y, width, height, color);
    }
}

/// One `fill_rect` call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FillRect<C> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: C,
}

impl<C> FillRect<C> {
    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}
