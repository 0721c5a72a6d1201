#![cfg_attr(not(test), no_std)]

//! RGB565 offscreen framebuffer for small color panels.

mod framebuffer;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;

/// Packs 8-bit channels into an RGB565 word.
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r >> 3) as u16) << 11) | (((g >> 2) as u16) << 5) | ((b >> 3) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channels_msb_first() {
        assert_eq!(rgb565(0xFF, 0x00, 0x00), 0xF800);
        assert_eq!(rgb565(0x00, 0xFF, 0x00), 0x07E0);
        assert_eq!(rgb565(0x00, 0x00, 0xFF), 0x001F);
        assert_eq!(rgb565(0xFF, 0xFF, 0xFF), 0xFFFF);
        assert_eq!(rgb565(0x07, 0x03, 0x07), 0x0000);
    }
}
