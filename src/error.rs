//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! All input validation happens before any bus traffic, so a validation
//! error never leaves a partial write behind. A transport error, on the
//! other hand, leaves the controller's addressing state undefined; the
//! caller should reissue a full window before drawing again.
//!
//! ## Example
//!
//! ```
//! use ili9488::{BuilderError, Dimensions, Rotation};
//!
//! // Panel larger than the controller RAM
//! let result = Dimensions::new(1000, 500);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Rotation must be a quarter turn
//! let result = Rotation::from_degrees(45);
//! assert!(matches!(result, Err(BuilderError::InvalidRotation { degrees: 45 })));
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns (width) supported by the ILI9488 controller
///
/// The ILI9488 frame memory is 320 source outputs wide.
///
/// NOTE: Some panels wire fewer columns; configure [`crate::Dimensions`] accordingly.
pub const MAX_COLUMNS: u16 = 320;

/// Maximum rows (height) supported by the ILI9488 controller
///
/// The ILI9488 frame memory is 480 gate outputs tall.
///
/// NOTE: Some panels wire fewer rows; configure [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 480;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. Never retried; the controller's write pointer may
    /// be desynchronized afterwards.
    Interface(I::Error),
    /// Pixel coordinates outside the panel
    ///
    /// Valid coordinates satisfy `x < width` and `y < height`.
    OutOfBounds {
        /// X coordinate requested
        x: u16,
        /// Y coordinate requested
        y: u16,
    },
    /// Image placement exceeds the panel
    ///
    /// `x + width > panel width` or `y + height > panel height`, with
    /// width/height taken after rotation.
    ImageOutOfBounds {
        /// Placement X offset
        x: u16,
        /// Placement Y offset
        y: u16,
        /// Image width after rotation
        width: u16,
        /// Image height after rotation
        height: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::OutOfBounds { x, y } => {
                write!(f, "Pixel out of bounds: ({x}, {y})")
            }
            Self::ImageOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Image {width}x{height} at ({x}, {y}) exceeds panel dimensions"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created or any bus traffic
/// is possible.
#[derive(Debug)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
    /// Rotation is not a quarter turn
    ///
    /// Only 0, 90, 180, and 270 degrees are supported.
    InvalidRotation {
        /// Degrees requested
        degrees: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::InvalidRotation { degrees } => {
                write!(f, "Invalid rotation {degrees} (must be 0/90/180/270)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
