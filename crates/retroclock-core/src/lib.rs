#![cfg_attr(not(test), no_std)]

//! Board-agnostic core of the retro clock display.
//!
//! The crate owns the retro digit font, the scaled glyph rasterizer that
//! turns glyph bits into filled rectangles, and the clock face that lays
//! digits out into an `HH:MM[:SS]` readout. All drawing goes through the
//! [`Surface`] trait, so the same code runs against a panel framebuffer, an
//! `embedded-graphics` draw target, or a recording surface in tests.

pub mod clock;
pub mod font;
pub mod glyph;
pub mod raster;
pub mod surface;

pub use clock::{ClockConfig, ClockError, ClockFace, ClockTime, HourFormat};
pub use font::{GlyphTable, RETRO_DIGITS};
pub use glyph::{GLYPH_COLUMNS, Glyph, InkBounds, MAX_GLYPH_ROWS};
pub use raster::{DrawOutcome, RasterError, SkipReason, TextOutcome, draw_scaled_glyph};
pub use surface::{FillRect, RecordingSurface, Surface};
