//! RGB565 color packing and wire-format conversion
//!
//! The driver's public color type is a packed 16-bit RGB565 value (5 bits
//! red, 6 bits green, 5 bits blue). On the wire the ILI9488 takes 18-bit
//! pixels as three full-range bytes (one per channel), so every drawing
//! path expands 565 through [`encode_rgb565`] before streaming.
//!
//! ## Scaling
//!
//! The 16-to-24-bit expansion is channel-wise proportional,
//! `channel_8 = (channel_n * 255) / channel_max`, with truncating integer
//! division. A naive shift-and-pad (`channel_n << 3`) would top out at 248
//! instead of 255 and produce visible banding near saturation.
//!
//! ## Example
//!
//! ```
//! use ili9488::color::{color565, encode_rgb565};
//!
//! let red = color565(255, 0, 0);
//! assert_eq!(red, 0xF800);
//! assert_eq!(encode_rgb565(red), [255, 0, 0]);
//!
//! // The 565 quantization is lossy; round-trips are not the identity.
//! let c = color565(200, 100, 50);
//! assert_ne!(encode_rgb565(c), [200, 100, 50]);
//! ```

/// Pack 8-bit channels into a 16-bit RGB565 value
///
/// Truncates each channel to its 565 width (red and blue keep the top 5
/// bits, green the top 6). Lossy: expanding the result back with
/// [`encode_rgb565`] does not recover the original channels.
pub fn color565(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r) & 0xF8) << 8 | (u16::from(g) & 0xFC) << 3 | u16::from(b) >> 3
}

/// Expand a packed RGB565 value into the 3-byte wire triple
///
/// Each channel is rescaled to the full 0-255 range with truncating
/// integer division, so both endpoints map exactly (0 -> 0, max -> 255).
pub fn encode_rgb565(color: u16) -> [u8; 3] {
    let r = (color >> 11) & 0x1F;
    let g = (color >> 5) & 0x3F;
    let b = color & 0x1F;
    [
        ((u32::from(r) * 255) / 31) as u8,
        ((u32::from(g) * 255) / 63) as u8,
        ((u32::from(b) * 255) / 31) as u8,
    ]
}

/// Expand raw 8-bit channels through the 565 quantization to the wire triple
///
/// Equivalent to `encode_rgb565(color565(r, g, b))` in one step. The image
/// path uses this so RGB buffers land on screen with exactly the colors a
/// caller would get by packing and drawing each pixel individually.
pub(crate) fn encode_rgb888(r: u8, g: u8, b: u8) -> [u8; 3] {
    [
        ((u32::from(r >> 3) * 255) / 31) as u8,
        ((u32::from(g >> 2) * 255) / 63) as u8,
        ((u32::from(b >> 3) * 255) / 31) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_primaries() {
        assert_eq!(encode_rgb565(0x0000), [0, 0, 0]);
        assert_eq!(encode_rgb565(0xFFFF), [255, 255, 255]);
        assert_eq!(encode_rgb565(0xF800), [255, 0, 0]);
        assert_eq!(encode_rgb565(0x07E0), [0, 255, 0]);
        assert_eq!(encode_rgb565(0x001F), [0, 0, 255]);
    }

    #[test]
    fn test_encode_is_proportional_not_shifted() {
        // 0b01111 red (15 of 31) scales to 123, not 15 << 3 = 120
        let half_red = 0x0F << 11;
        assert_eq!(u32::from(encode_rgb565(half_red)[0]), (15 * 255) / 31);
        assert_eq!(encode_rgb565(half_red)[0], 123);
    }

    #[test]
    fn test_encode_channel_scaling_exhaustive() {
        for c in 0..=u16::MAX {
            let [r, g, b] = encode_rgb565(c);
            assert_eq!(u32::from(r), (u32::from((c >> 11) & 0x1F) * 255) / 31);
            assert_eq!(u32::from(g), (u32::from((c >> 5) & 0x3F) * 255) / 63);
            assert_eq!(u32::from(b), (u32::from(c & 0x1F) * 255) / 31);
        }
    }

    #[test]
    fn test_color565_packs_primaries() {
        assert_eq!(color565(0, 0, 0), 0x0000);
        assert_eq!(color565(255, 255, 255), 0xFFFF);
        assert_eq!(color565(255, 0, 0), 0xF800);
        assert_eq!(color565(0, 255, 0), 0x07E0);
        assert_eq!(color565(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_color565_truncates_low_bits() {
        // Low 3 (red/blue) and 2 (green) bits are dropped
        assert_eq!(color565(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(color565(0xF8, 0xFC, 0xF8), 0xFFFF);
    }

    #[test]
    fn test_encode_rgb888_matches_pack_then_encode() {
        for &(r, g, b) in &[(0u8, 0u8, 0u8), (255, 255, 255), (200, 100, 50), (17, 93, 201)] {
            assert_eq!(encode_rgb888(r, g, b), encode_rgb565(color565(r, g, b)));
        }
    }
}
