use core::fmt::Debug;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    primitives::Rectangle,
};
use log::warn;

use super::Surface;

/// Adapts an `embedded-graphics` draw target into a [`Surface`].
///
/// Fills are clipped to the target's bounding box before they reach
/// `fill_solid`. Target errors are logged and dropped.
#[derive(Debug)]
pub struct GraphicsSurface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsSurface<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Surface for GraphicsSurface<'_, D>
where
    D: DrawTarget,
    D::Error: Debug,
{
    type Color = D::Color;

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: D::Color) {
        let Some(area) = clip(x, y, width, height, &self.target.bounding_box()) else {
            return;
        };

        if let Err(err) = self.target.fill_solid(&area, color) {
            warn!("surface fill at ({}, {}) failed: {:?}", x, y, err);
        }
    }
}

/// Intersects a fill with `bounds` in `i64` so anchors near the `i32` limits
/// cannot overflow. Returns `None` when nothing is left to draw.
fn clip(x: i32, y: i32, width: i32, height: i32, bounds: &Rectangle) -> Option<Rectangle> {
    if width <= 0 || height <= 0 {
        return None;
    }

    let bounds_x = i64::from(bounds.top_left.x);
    let bounds_y = i64::from(bounds.top_left.y);
    let left = i64::from(x).max(bounds_x);
    let top = i64::from(y).max(bounds_y);
    let right = (i64::from(x) + i64::from(width)).min(bounds_x + i64::from(bounds.size.width));
    let bottom = (i64::from(y) + i64::from(height)).min(bounds_y + i64::from(bounds.size.height));
    if left >= right || top >= bottom {
        return None;
    }

    // Corner is one of two `i32` inputs; extents are below `i32::MAX`.
    Some(Rectangle::new(
        Point::new(left as i32, top as i32),
        Size::new((right - left) as u32, (bottom - top) as u32),
    ))
}
