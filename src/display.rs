//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::{encode_rgb565, encode_rgb888};
use crate::command::{COLUMN_SET, INIT_SEQUENCE, PAGE_SET, RAM_WRITE, VERTICAL_SCROLL_ADDR};
use crate::config::{Config, Rotation};
use crate::error::Error;
use crate::image::ImageBuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Pixels per chunk when streaming encoded data
///
/// Trades stack use (3 bytes per pixel) against per-write overhead.
const CHUNK_PIXELS: usize = 64;

/// Core display driver for the ILI9488
///
/// Translates drawing requests into the controller's command/parameter
/// protocol: each drawing call computes an inclusive address window,
/// programs it via COLUMN_SET/PAGE_SET, then streams 3-byte RGB triples
/// after RAM_WRITE.
///
/// Every operation blocks for the duration of its SPI traffic and takes
/// `&mut self`; the hardware session is non-reentrant (one chip-select
/// burst must complete before another begins), so a display shared
/// across threads must be serialized externally.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Cached vertical scroll offset, 0..height
    scroll: u16,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The display is unusable until [`init`](Self::init) has run.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            scroll: 0,
        }
    }

    /// Perform hardware reset and send the initialization sequence
    ///
    /// Pulses the reset line (if one is wired) and then sends every entry
    /// of [`INIT_SEQUENCE`] in order. A transport failure propagates
    /// immediately and leaves the controller in an undefined state; the
    /// only recovery is to call `init` again.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);
        for (cmd, data) in INIT_SEQUENCE {
            self.send_command(*cmd)?;
            if let Some(data) = data {
                self.send_data(data)?;
            }
        }
        debug!(
            "ili9488 initialized, {}x{}",
            self.config.dimensions.width, self.config.dimensions.height
        );
        Ok(())
    }

    /// Program the address window and open a RAM write burst
    ///
    /// Issues COLUMN_SET with big-endian `[x0, x1]`, PAGE_SET with
    /// big-endian `[y0, y1]` (both inclusive), then RAM_WRITE with no
    /// payload of its own. The caller must follow with exactly
    /// `(x1-x0+1)*(y1-y0+1)` encoded pixel triples as data; any other
    /// count desynchronizes the controller's write pointer for all
    /// subsequent operations.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the window is empty or extends
    /// past the panel, before any bus traffic.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        if x0 > x1 || x1 >= self.config.dimensions.width {
            return Err(Error::OutOfBounds { x: x1, y: y1 });
        }
        if y0 > y1 || y1 >= self.config.dimensions.height {
            return Err(Error::OutOfBounds { x: x1, y: y1 });
        }
        trace!("window ({x0},{y0})..=({x1},{y1})");

        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.send_command(COLUMN_SET)?;
        self.send_data(&[x0h, x0l, x1h, x1l])?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.send_command(PAGE_SET)?;
        self.send_data(&[y0h, y0l, y1h, y1l])?;

        self.send_command(RAM_WRITE)
    }

    /// Fill the entire panel with one color
    pub fn fill(&mut self, color: u16) -> DisplayResult<I> {
        let width = self.config.dimensions.width;
        let height = self.config.dimensions.height;
        self.set_window(0, 0, width - 1, height - 1)?;
        self.stream_solid(self.config.dimensions.pixel_count(), encode_rgb565(color))
    }

    /// Set a single pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if `x >= width` or `y >= height`,
    /// before any bus traffic.
    pub fn pixel(&mut self, x: u16, y: u16, color: u16) -> DisplayResult<I> {
        if x >= self.config.dimensions.width || y >= self.config.dimensions.height {
            return Err(Error::OutOfBounds { x, y });
        }
        self.set_window(x, y, x, y)?;
        self.send_data(&encode_rgb565(color))
    }

    /// Blit an image buffer at an offset
    ///
    /// `rotation` overrides the configured default; the image is rotated
    /// clockwise (quarter turns swap the canvas) before placement.
    /// Pixels are streamed row-major from the rotated top-left, each
    /// expanded through the RGB565 quantization so a blit and a
    /// per-pixel [`pixel`](Self::pixel) loop produce identical colors.
    ///
    /// # Errors
    ///
    /// Returns `Error::ImageOutOfBounds` if the rotated image placed at
    /// `(x, y)` extends past the panel, before any bus traffic.
    pub fn image(
        &mut self,
        img: &ImageBuffer<'_>,
        rotation: Option<Rotation>,
        x: u16,
        y: u16,
    ) -> DisplayResult<I> {
        let rotation = rotation.unwrap_or(self.config.rotation);
        let (width, height) = img.dimensions_with(rotation);
        if u32::from(x) + u32::from(width) > u32::from(self.config.dimensions.width)
            || u32::from(y) + u32::from(height) > u32::from(self.config.dimensions.height)
        {
            return Err(Error::ImageOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        self.set_window(x, y, x + width - 1, y + height - 1)?;

        let mut chunk = [0u8; CHUNK_PIXELS * 3];
        let mut filled = 0;
        for [r, g, b] in img.pixels(rotation) {
            chunk[filled..filled + 3].copy_from_slice(&encode_rgb888(r, g, b));
            filled += 3;
            if filled == chunk.len() {
                self.send_data(&chunk)?;
                filled = 0;
            }
        }
        if filled > 0 {
            self.send_data(&chunk[..filled])?;
        }
        Ok(())
    }

    /// Scroll the display vertically by `dy` lines
    ///
    /// Adds `dy` to the cached scroll offset, wrapping modulo the panel
    /// height in either direction, and writes the result to the
    /// controller's vertical scrolling start address register. Total for
    /// all `dy`; the sum is taken in 64-bit before wrapping.
    pub fn scroll(&mut self, dy: i32) -> DisplayResult<I> {
        let height = i64::from(self.config.dimensions.height);
        self.scroll = ((i64::from(self.scroll) + i64::from(dy)).rem_euclid(height)) as u16;
        self.send_command(VERTICAL_SCROLL_ADDR)?;
        let [hi, lo] = self.scroll.to_be_bytes();
        self.send_data(&[hi, lo])
    }

    /// The current scroll offset, without touching the bus
    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    /// Stream `count` copies of one encoded pixel triple
    pub(crate) fn stream_solid(&mut self, count: usize, triple: [u8; 3]) -> DisplayResult<I> {
        let mut chunk = [0u8; CHUNK_PIXELS * 3];
        for px in chunk.chunks_exact_mut(3) {
            px.copy_from_slice(&triple);
        }
        let mut remaining = count;
        while remaining >= CHUNK_PIXELS {
            self.send_data(&chunk)?;
            remaining -= CHUNK_PIXELS;
        }
        if remaining > 0 {
            self.send_data(&chunk[..remaining * 3])?;
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Panel width in pixels
    pub fn width(&self) -> u16 {
        self.config.dimensions.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u16 {
        self.config.dimensions.height
    }

    /// Default rotation for image blits
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }
}
