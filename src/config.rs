//! Display configuration types and builder

use embedded_hal::spi::{Mode, MODE_0};

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default SPI clock rate in Hz
pub const DEFAULT_BAUDRATE: u32 = 16_000_000;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero or
    /// exceeds the controller's RAM (320 columns x 480 rows).
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total pixel count of the panel
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for Dimensions {
    /// The common 320x480 ILI9488 panel
    fn default() -> Self {
        Self {
            width: 320,
            height: 480,
        }
    }
}

/// Display rotation relative to native orientation
///
/// Used as the default rotation for image blits. The controller's memory
/// access mode itself is fixed by the init sequence; rotation is applied
/// to the pixel buffer during streaming.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Parse a rotation from degrees
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRotation` for anything other than
    /// 0, 90, 180, or 270.
    pub fn from_degrees(degrees: u16) -> Result<Self, BuilderError> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(BuilderError::InvalidRotation { degrees }),
        }
    }

    /// The rotation as degrees clockwise
    pub fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether this rotation swaps width and height
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Display configuration
///
/// Holds the panel geometry plus the SPI bus parameters the display was
/// designed for. The bus parameters are informational: the collaborator
/// that constructs the `SpiDevice` is responsible for actually clocking
/// the bus at `baudrate` in `spi_mode`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Default rotation for image blits
    pub rotation: Rotation,
    /// SPI clock rate in Hz the panel is wired for
    pub baudrate: u32,
    /// SPI clock polarity and phase (the ILI9488 default is mode 0,
    /// clock idle-low, sample on the leading edge)
    pub spi_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ili9488::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(320, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate90)
///     .baudrate(40_000_000)
///     .build();
/// assert_eq!(config.dimensions.height, 480);
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions
    dimensions: Dimensions,
    /// Default rotation for image blits
    rotation: Rotation,
    /// SPI clock rate in Hz
    baudrate: u32,
    /// SPI clock polarity and phase
    spi_mode: Mode,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            rotation: Rotation::Rotate0,
            baudrate: DEFAULT_BAUDRATE,
            spi_mode: MODE_0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values (320x480, no rotation,
    /// 16 MHz, SPI mode 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the default rotation for image blits
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the SPI clock rate in Hz
    pub fn baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = baudrate;
        self
    }

    /// Set the SPI clock polarity and phase
    pub fn spi_mode(mut self, mode: Mode) -> Self {
        self.spi_mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            dimensions: self.dimensions,
            rotation: self.rotation,
            baudrate: self.baudrate,
            spi_mode: self.spi_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = Builder::new().build();
        assert_eq!(config.dimensions, Dimensions::default());
        assert_eq!(config.dimensions.width, 320);
        assert_eq!(config.dimensions.height, 480);
        assert_eq!(config.baudrate, DEFAULT_BAUDRATE);
        assert_eq!(config.spi_mode, MODE_0);
    }

    #[test]
    fn test_dimensions_validation() {
        assert!(Dimensions::new(320, 480).is_ok());
        assert!(Dimensions::new(240, 320).is_ok());
        assert!(matches!(
            Dimensions::new(0, 480),
            Err(BuilderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(320, 0),
            Err(BuilderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(321, 480),
            Err(BuilderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(320, 481),
            Err(BuilderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_pixel_count() {
        let dims = Dimensions::new(320, 480).unwrap();
        assert_eq!(dims.pixel_count(), 153_600);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0).unwrap(), Rotation::Rotate0);
        assert_eq!(Rotation::from_degrees(90).unwrap(), Rotation::Rotate90);
        assert_eq!(Rotation::from_degrees(180).unwrap(), Rotation::Rotate180);
        assert_eq!(Rotation::from_degrees(270).unwrap(), Rotation::Rotate270);
        assert!(matches!(
            Rotation::from_degrees(45),
            Err(BuilderError::InvalidRotation { degrees: 45 })
        ));
        assert!(matches!(
            Rotation::from_degrees(360),
            Err(BuilderError::InvalidRotation { .. })
        ));
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        assert!(!Rotation::Rotate0.swaps_dimensions());
        assert!(Rotation::Rotate90.swaps_dimensions());
        assert!(!Rotation::Rotate180.swaps_dimensions());
        assert!(Rotation::Rotate270.swaps_dimensions());
    }
}
