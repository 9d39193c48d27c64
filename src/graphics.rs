//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! directly on [`Display`], so the embedded-graphics primitives (lines,
//! rectangles, circles, text, images) render straight to the panel with
//! no intermediate framebuffer.
//!
//! Filled rectangles go through a single address window and a solid
//! burst; everything else falls back to per-pixel writes, each of which
//! is its own window. That is slow for large soft-rendered areas but
//! needs no RAM, which suits the 225 KiB full-frame size of this panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ili9488::{Builder, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, Some(MockPin));
//! let mut display = Display::new(interface, Builder::new().build());
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, TFT!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Size},
    pixelcolor::{IntoStorage, Rgb565},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::encode_rgb565;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = i32::from(self.width());
        let height = i32::from(self.height());
        for Pixel(point, color) in pixels {
            // Out-of-bounds pixels are ignored per the DrawTarget contract
            if point.x >= 0 && point.x < width && point.y >= 0 && point.y < height {
                self.pixel(point.x as u16, point.y as u16, color.into_storage())?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let x0 = area.top_left.x as u16;
        let y0 = area.top_left.y as u16;
        let x1 = bottom_right.x as u16;
        let y1 = bottom_right.y as u16;

        self.set_window(x0, y0, x1, y1)?;
        let count = usize::from(x1 - x0 + 1) * usize::from(y1 - y0 + 1);
        self.stream_solid(count, encode_rgb565(color.into_storage()))
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into_storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COLUMN_SET, PAGE_SET, RAM_WRITE};
    use crate::config::Builder;
    use alloc::vec::Vec;
    use embedded_graphics_core::geometry::Point;
    use embedded_graphics_core::pixelcolor::RgbColor;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<u8>,
        command_data: Vec<(u8, Vec<u8>)>,
        last_command: Option<u8>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                command_data: Vec::new(),
                last_command: None,
            }
        }

        fn ram_write_burst(&self) -> Vec<u8> {
            let mut burst = Vec::new();
            for (cmd, data) in &self.command_data {
                if *cmd == RAM_WRITE {
                    burst.extend_from_slice(data);
                }
            }
            burst
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            self.last_command = Some(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if let Some(cmd) = self.last_command {
                self.command_data.push((cmd, data.to_vec()));
            }
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(), Builder::new().build())
    }

    #[test]
    fn test_size_matches_panel() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(320, 480));
    }

    #[test]
    fn test_fill_solid_uses_one_window() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(1, 2), Size::new(3, 2));
        display.fill_solid(&area, Rgb565::RED).unwrap();

        assert_eq!(
            display.interface().commands,
            &[COLUMN_SET, PAGE_SET, RAM_WRITE]
        );
        assert_eq!(
            display.interface().command_data[0],
            (COLUMN_SET, alloc::vec![0x00, 1, 0x00, 3])
        );
        assert_eq!(
            display.interface().command_data[1],
            (PAGE_SET, alloc::vec![0x00, 2, 0x00, 3])
        );
        let burst = display.interface().ram_write_burst();
        assert_eq!(burst.len(), 6 * 3);
        for triple in burst.chunks_exact(3) {
            assert_eq!(triple, &[255, 0, 0]);
        }
    }

    #[test]
    fn test_fill_solid_clips_to_panel() {
        let mut display = test_display();
        // Extends 2 pixels past the right edge; clipped, not an error
        let area = Rectangle::new(Point::new(318, 0), Size::new(4, 1));
        display.fill_solid(&area, Rgb565::BLUE).unwrap();

        assert_eq!(
            display.interface().command_data[0],
            (COLUMN_SET, alloc::vec![0x01, 0x3E, 0x01, 0x3F])
        );
        assert_eq!(display.interface().ram_write_burst().len(), 2 * 3);
    }

    #[test]
    fn test_fill_solid_fully_outside_is_noop() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(400, 500), Size::new(4, 4));
        display.fill_solid(&area, Rgb565::BLUE).unwrap();
        assert!(display.interface().commands.is_empty());
    }

    #[test]
    fn test_draw_iter_skips_out_of_bounds() {
        let mut display = test_display();
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(0, 0), Rgb565::GREEN),
            Pixel(Point::new(320, 0), Rgb565::RED),
            Pixel(Point::new(0, 480), Rgb565::RED),
        ];
        display.draw_iter(pixels).unwrap();

        // Only the in-bounds pixel produced traffic
        assert_eq!(display.interface().ram_write_burst(), alloc::vec![0, 255, 0]);
    }

    #[test]
    fn test_clear_fills_panel() {
        let mut display = test_display();
        display.clear(Rgb565::WHITE).unwrap();
        assert_eq!(
            display.interface().ram_write_burst().len(),
            320 * 480 * 3
        );
    }
}
