//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for communicating with the ILI9488 controller over 4-wire SPI.
//!
//! ## Hardware Requirements
//!
//! The ILI9488 requires:
//! - SPI bus (MOSI + SCK, mode 0 by default)
//! - CS, owned by the [`SpiDevice`] and asserted per transaction
//! - **DC**: Data/Command select GPIO (output)
//! - **RST**: Reset GPIO (output, active low) - optional, panels with the
//!   reset line tied to the supply rail work without it
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ili9488::{DisplayInterface, Interface};
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC pin, and an optional reset pin
//! let mut interface = Interface::new(MockSpi, MockPin, Some(MockPin));
//!
//! // Pulse the hardware reset line
//! interface.reset(&mut delay);
//!
//! // Send a command followed by parameters
//! let _ = interface.send_command(0x2A); // Column address set
//! let _ = interface.send_data(&[0x00, 0x00, 0x01, 0x3F]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the ILI9488 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus behind an SPI expander, or an
/// inverted DC line), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send parameter or pixel data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must drive the RST line through a power-on
    /// reset pulse (low for at least 10ms, then high with at least 120ms
    /// for the controller to come out of reset), or do nothing if no
    /// reset line is wired.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ILI9488
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Chip select is owned by the [`SpiDevice`], which asserts it for each
/// command or data transaction.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low), absent on panels without a wired reset line
    rst: Option<RST>,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low), or `None` if the panel's
    ///   reset line is not under software control
    pub fn new(spi: SPI, dc: DC, rst: Option<RST>) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 120ms for the
        // controller to finish its power-on sequence. No-op without a
        // wired reset line.
        if let Some(rst) = self.rst.as_mut() {
            let _ = rst.set_low();
            delay.delay_ms(10);
            let _ = rst.set_high();
            delay.delay_ms(120);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    #[derive(Debug)]
    struct MockSpi {
        written: alloc::vec::Vec<u8>,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(data) = op {
                    self.written.extend_from_slice(data);
                }
            }
            Ok(())
        }
    }

    /// Pin that records level transitions into a shared log
    #[derive(Debug)]
    struct MockPin<'a> {
        log: &'a RefCell<alloc::vec::Vec<bool>>,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(true);
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_command_drives_dc_low() {
        let dc_log = RefCell::new(alloc::vec::Vec::new());
        let rst_log = RefCell::new(alloc::vec::Vec::new());
        let mut interface = Interface::new(
            MockSpi {
                written: alloc::vec::Vec::new(),
            },
            MockPin { log: &dc_log },
            Some(MockPin { log: &rst_log }),
        );

        interface.send_command(0x2A).unwrap();
        assert_eq!(*dc_log.borrow(), alloc::vec![false]);

        interface.send_data(&[0x00, 0x01]).unwrap();
        assert_eq!(*dc_log.borrow(), alloc::vec![false, true]);

        let (spi, _, _) = interface.release();
        assert_eq!(spi.written, alloc::vec![0x2A, 0x00, 0x01]);
    }

    #[test]
    fn test_reset_pulses_rst_low_then_high() {
        let dc_log = RefCell::new(alloc::vec::Vec::new());
        let rst_log = RefCell::new(alloc::vec::Vec::new());
        let mut interface = Interface::new(
            MockSpi {
                written: alloc::vec::Vec::new(),
            },
            MockPin { log: &dc_log },
            Some(MockPin { log: &rst_log }),
        );

        interface.reset(&mut MockDelay);
        assert_eq!(*rst_log.borrow(), alloc::vec![false, true]);
    }

    #[test]
    fn test_reset_without_rst_pin_is_noop() {
        let dc_log = RefCell::new(alloc::vec::Vec::new());
        let mut interface: Interface<_, _, MockPin<'_>> = Interface::new(
            MockSpi {
                written: alloc::vec::Vec::new(),
            },
            MockPin { log: &dc_log },
            None,
        );

        interface.reset(&mut MockDelay);
        assert!(dc_log.borrow().is_empty());
    }
}
