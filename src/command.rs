//! ILI9488 command definitions
//!
//! This module defines the command bytes used to control the ILI9488 TFT
//! display controller, plus the fixed power-on initialization sequence.
//! Commands are sent over SPI with the DC pin low for commands and high
//! for parameters or pixel data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select, handled by the `SpiDevice`)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter/data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9488::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, Some(MockPin));
//! // Set a one-column address window
//! let _ = interface.send_command(command::COLUMN_SET);
//! let _ = interface.send_data(&[0x00, 0x00, 0x00, 0x00]);
//! ```

// Addressing and memory commands

/// Column address set command (0x2A)
///
/// Sets the column (X) range of the address window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB], inclusive.
pub const COLUMN_SET: u8 = 0x2A;

/// Page address set command (0x2B)
///
/// Sets the page (Y) range of the address window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB], inclusive.
pub const PAGE_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Resets the controller's write pointer to the window origin.
/// Takes no parameters of its own; the pixel data burst (3 bytes per
/// pixel, R/G/B full range) follows as data. The burst length must be
/// exactly one triple per window pixel or the write pointer
/// desynchronizes for all subsequent operations.
pub const RAM_WRITE: u8 = 0x2C;

/// Memory read command (0x2E)
///
/// Reads frame memory back over SPI. Unused by the write-only paths of
/// this driver; defined for completeness.
pub const RAM_READ: u8 = 0x2E;

/// Vertical scrolling start address command (0x37)
///
/// Sets the row displayed at the top of the panel for hardware vertical
/// scrolling. Requires 2 bytes: big-endian line offset.
pub const VERTICAL_SCROLL_ADDR: u8 = 0x37;

// Initialization-only commands

/// Positive gamma control command (0xE0), 15 parameter bytes
pub const POSITIVE_GAMMA_CONTROL: u8 = 0xE0;

/// Negative gamma control command (0xE1), 15 parameter bytes
pub const NEGATIVE_GAMMA_CONTROL: u8 = 0xE1;

/// Power control 1 command (0xC0), 2 parameter bytes (VREG1OUT, VREG2OUT)
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 command (0xC1), 1 parameter byte
pub const POWER_CONTROL_2: u8 = 0xC1;

/// VCOM control 1 command (0xC5), 3 parameter bytes
pub const VCOM_CONTROL_1: u8 = 0xC5;

/// Memory access control command (0x36)
///
/// Bit layout: | MY | MX | MV | ML | BGR | MH | x | x |
///
/// The init sequence fixes this to 0x48 (MX | BGR): row-major addressing,
/// origin top-left. The row-major streaming order used by
/// [`Display::image`](crate::display::Display::image) assumes exactly this
/// value; a variant panel that needs a different MADCTL also needs a
/// different traversal order.
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// 0x66 selects 18 bits per pixel (6 bits per channel) on both the RGB
/// and MCU interfaces. In 4-wire SPI mode the ILI9488 cannot take 16-bit
/// RGB565 directly, which is why pixels go out as 3-byte triples.
pub const PIXEL_FORMAT_SET: u8 = 0x3A;

/// Interface mode control command (0xB0), 1 parameter byte
pub const INTERFACE_MODE_CONTROL: u8 = 0xB0;

/// Frame rate control (normal mode) command (0xB1), 1 parameter byte
pub const FRAME_RATE_CONTROL: u8 = 0xB1;

/// Display inversion control command (0xB4), 1 parameter byte
pub const DISPLAY_INVERSION_CONTROL: u8 = 0xB4;

/// Display function control command (0xB6), 2 parameter bytes
pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;

/// Set image function command (0xE9), 1 parameter byte
pub const SET_IMAGE_FUNCTION: u8 = 0xE9;

/// Adjust control 3 command (0xF7), 4 parameter bytes
pub const ADJUST_CONTROL_3: u8 = 0xF7;

/// Sleep out command (0x11), no parameters
pub const SLEEP_OUT: u8 = 0x11;

/// Display on command (0x29), no parameters
pub const DISPLAY_ON: u8 = 0x29;

/// One entry of the initialization sequence: a command byte and its
/// parameter payload. `None` means the command takes no data.
pub type InitCommand = (u8, Option<&'static [u8]>);

/// Power-on initialization sequence for the ILI9488
///
/// Sent verbatim, in order, after the hardware reset pulse. The payloads
/// are controller-specific magic values and must be reproduced
/// bit-for-bit for hardware compatibility.
pub const INIT_SEQUENCE: &[InitCommand] = &[
    (
        POSITIVE_GAMMA_CONTROL,
        Some(&[
            0x00, 0x03, 0x09, 0x08, 0x16, 0x0A, 0x3F, 0x78, 0x4C, 0x09, 0x0A, 0x08, 0x16, 0x1A,
            0x0F,
        ]),
    ),
    (
        NEGATIVE_GAMMA_CONTROL,
        Some(&[
            0x00, 0x16, 0x19, 0x03, 0x0F, 0x05, 0x32, 0x45, 0x46, 0x04, 0x0E, 0x0D, 0x35, 0x37,
            0x0F,
        ]),
    ),
    (POWER_CONTROL_1, Some(&[0x17, 0x15])),
    (POWER_CONTROL_2, Some(&[0x41])),
    (VCOM_CONTROL_1, Some(&[0x00, 0x12, 0x80])),
    // MX | BGR; see MEMORY_ACCESS_CONTROL
    (MEMORY_ACCESS_CONTROL, Some(&[0x48])),
    // 18 bpp; DPI = 6, DBI = 6
    (PIXEL_FORMAT_SET, Some(&[0x66])),
    // SDA_EN = 1
    (INTERFACE_MODE_CONTROL, Some(&[0x80])),
    // FRS = 10, DIVA = 0
    (FRAME_RATE_CONTROL, Some(&[0xA0])),
    // 2-dot inversion
    (DISPLAY_INVERSION_CONTROL, Some(&[0x02])),
    (DISPLAY_FUNCTION_CONTROL, Some(&[0x02, 0x02])),
    (SET_IMAGE_FUNCTION, Some(&[0x00])),
    (ADJUST_CONTROL_3, Some(&[0xA9, 0x51, 0x2C, 0x82])),
    (SLEEP_OUT, None),
    (DISPLAY_ON, None),
];
