//! Borrowed RGB/RGBA pixel buffers for image blits
//!
//! [`ImageBuffer`] wraps a caller-owned byte slice holding row-major
//! 8-bit-per-channel pixels, as produced by any image decoder. The driver
//! never copies the buffer: rotation is applied during streaming by
//! traversing the source in a transformed order, which is behaviorally
//! identical to rotating the image first and streaming row-major.
//!
//! Alpha channels are accepted and ignored; the panel has no blending.
//!
//! ## Example
//!
//! ```
//! use ili9488::{ColorMode, ImageBuffer, Rotation};
//!
//! // A 2x1 image: one red pixel, one green pixel
//! let data = [255, 0, 0, 0, 255, 0];
//! let img = match ImageBuffer::new(&data, 2, 1, ColorMode::Rgb) {
//!     Ok(img) => img,
//!     Err(_) => return,
//! };
//!
//! assert_eq!(img.dimensions_with(Rotation::Rotate0), (2, 1));
//! // A quarter turn swaps the canvas
//! assert_eq!(img.dimensions_with(Rotation::Rotate90), (1, 2));
//! ```

use crate::config::Rotation;

/// Channel layout of an image buffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMode {
    /// 3 bytes per pixel: R, G, B
    Rgb,
    /// 4 bytes per pixel: R, G, B, A (alpha ignored)
    Rgba,
}

impl ColorMode {
    /// Bytes per pixel for this layout
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Error constructing an [`ImageBuffer`]
#[derive(Debug, PartialEq)]
pub enum ImageError {
    /// Byte length does not match `width * height * bytes_per_pixel`
    InvalidLength {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
    /// Width or height is zero
    ZeroDimension {
        /// Width in pixels
        width: u16,
        /// Height in pixels
        height: u16,
    },
}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { expected, provided } => write!(
                f,
                "Invalid image length: expected {expected} bytes, provided {provided}"
            ),
            Self::ZeroDimension { width, height } => {
                write!(f, "Image dimensions {width}x{height} must be non-zero")
            }
        }
    }
}

impl core::error::Error for ImageError {}

/// A borrowed, row-major, 8-bit-per-channel pixel buffer
#[derive(Clone, Copy, Debug)]
pub struct ImageBuffer<'a> {
    /// Pixel bytes, row-major, origin top-left
    data: &'a [u8],
    /// Width in pixels
    width: u16,
    /// Height in pixels
    height: u16,
    /// Channel layout
    mode: ColorMode,
}

impl<'a> ImageBuffer<'a> {
    /// Wrap a byte slice as an image
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ZeroDimension`] if `width` or `height` is
    /// zero, or [`ImageError::InvalidLength`] if `data.len()` is not
    /// exactly `width * height * bytes_per_pixel`.
    pub fn new(
        data: &'a [u8],
        width: u16,
        height: u16,
        mode: ColorMode,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let expected = usize::from(width) * usize::from(height) * mode.bytes_per_pixel();
        if data.len() != expected {
            return Err(ImageError::InvalidLength {
                expected,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            mode,
        })
    }

    /// Width in pixels (unrotated)
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels (unrotated)
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Channel layout
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Canvas dimensions after applying a rotation
    ///
    /// Quarter turns (90/270) swap width and height.
    pub fn dimensions_with(&self, rotation: Rotation) -> (u16, u16) {
        if rotation.swaps_dimensions() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Raw channels of the pixel at unrotated coordinates
    fn channels(&self, x: u16, y: u16) -> [u8; 3] {
        let idx = (usize::from(y) * usize::from(self.width) + usize::from(x))
            * self.mode.bytes_per_pixel();
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Iterate pixels in rotated row-major order
    ///
    /// Yields `[r, g, b]` channel triples for the rotated canvas, row by
    /// row from the top-left, matching the streaming order the
    /// controller's memory access mode expects.
    pub fn pixels(&self, rotation: Rotation) -> Pixels<'a, '_> {
        let (width, height) = self.dimensions_with(rotation);
        Pixels {
            image: self,
            rotation,
            width,
            height,
            x: 0,
            y: 0,
        }
    }
}

/// Iterator over an image's pixels in rotated row-major order
///
/// Created by [`ImageBuffer::pixels`].
pub struct Pixels<'a, 'b> {
    /// Source image
    image: &'b ImageBuffer<'a>,
    /// Rotation applied during traversal
    rotation: Rotation,
    /// Rotated canvas width
    width: u16,
    /// Rotated canvas height
    height: u16,
    /// Next column in the rotated canvas
    x: u16,
    /// Next row in the rotated canvas
    y: u16,
}

impl Iterator for Pixels<'_, '_> {
    type Item = [u8; 3];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.height {
            return None;
        }
        // Map the rotated-canvas coordinate back to the source pixel;
        // rotations are clockwise.
        let (sx, sy) = match self.rotation {
            Rotation::Rotate0 => (self.x, self.y),
            Rotation::Rotate90 => (self.y, self.image.height - 1 - self.x),
            Rotation::Rotate180 => (
                self.image.width - 1 - self.x,
                self.image.height - 1 - self.y,
            ),
            Rotation::Rotate270 => (self.image.width - 1 - self.y, self.x),
        };
        let channels = self.image.channels(sx, sy);

        self.x += 1;
        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(channels)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = usize::from(self.width) * usize::from(self.height);
        let done = usize::from(self.y) * usize::from(self.width) + usize::from(self.x);
        let remaining = total - done;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_, '_> {}
