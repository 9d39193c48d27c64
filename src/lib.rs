//! ILI9488 TFT Display Driver
//!
//! A driver for the ILI9488 TFT display controller (up to 320x480 pixels)
//! over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - RGB565 color API with proportional 18-bit wire expansion
//! - Image blits with clockwise rotation, no intermediate buffer
//! - Hardware vertical scrolling
//!
//! ## Wiring
//!
//! The controller needs the SPI bus (SCK + MOSI), chip select (owned by
//! the [`SpiDevice`](embedded_hal::spi::SpiDevice)), a DC
//! (data/command) GPIO, and optionally a reset GPIO. Commands go out
//! with DC low, parameters and pixel data with DC high.
//!
//! ## Thread safety
//!
//! The driver is synchronous and takes `&mut self` for every operation.
//! The column/page/RAM-write sequence is not re-entrant at the hardware
//! level, so a display shared across threads must be wrapped in a mutex
//! or owned by a single task.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9488::{color565, Builder, Display, Interface, Rotation};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, Some(rst));
//! let config = Builder::new().rotation(Rotation::Rotate0).build();
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! // Clear to white, then put a red pixel in the center
//! let _ = display.fill(color565(255, 255, 255));
//! let _ = display.pixel(
//!     display.width() / 2,
//!     display.height() / 2,
//!     color565(255, 0, 0),
//! );
//!
//! // Scroll the panel down 40 lines
//! let _ = display.scroll(40);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 packing and wire-format conversion
pub mod color;
/// ILI9488 command definitions and init sequence
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Borrowed RGB/RGBA pixel buffers for image blits
pub mod image;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{color565, encode_rgb565};
pub use config::{Builder, Config, Dimensions, Rotation, DEFAULT_BAUDRATE, MAX_COLUMNS, MAX_ROWS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use image::{ColorMode, ImageBuffer, ImageError};
pub use interface::{DisplayInterface, Interface, InterfaceError};
