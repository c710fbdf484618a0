//! LCD module configuration
//!
//! Describes one character LCD sitting behind an I2C GPIO expander:
//! where it lives on the bus, how big it is, and how long to let the
//! controller settle around each enable pulse.

/// Typical PCF8574 backpack address (A0-A2 pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Settle time around each enable pulse, in microseconds
///
/// The HD44780 needs well under a microsecond; 600 µs leaves a wide margin
/// for slow expanders and long wires.
pub const DEFAULT_SETTLE_US: u32 = 600;

/// Longest line the HD44780 DDRAM can hold in two-line mode
pub const MAX_COLUMNS: u8 = 40;

/// Maximum number of lines addressable with the two-line DDRAM map
pub const MAX_LINES: u8 = 2;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address is outside the 7-bit non-reserved range (0x08-0x77)
    InvalidAddress,
    /// Line or column count not supported by the two-line address map
    UnsupportedGeometry,
    /// Settle time of zero
    InvalidSettleTime,
}

/// Display size in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Number of text lines
    pub lines: u8,
    /// Characters per line
    pub columns: u8,
}

impl Geometry {
    /// The common 16x2 module
    pub const LCD_1602: Self = Self {
        lines: 2,
        columns: 16,
    };

    /// Create a new geometry
    pub const fn new(lines: u8, columns: u8) -> Self {
        Self { lines, columns }
    }

    /// Check whether a cursor position is on screen
    pub const fn contains(&self, line: u8, column: u8) -> bool {
        line < self.lines && column < self.columns
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::LCD_1602
    }
}

/// Character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdConfig {
    /// 7-bit I2C address of the expander
    pub address: u8,
    /// Drive the backlight bit on every transfer
    pub backlight: bool,
    /// Display size
    pub geometry: Geometry,
    /// Delay before, between and after enable edges (µs)
    pub settle_us: u32,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl LcdConfig {
    /// Create a 16x2 config with backlight on at the given address
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            backlight: true,
            geometry: Geometry::LCD_1602,
            settle_us: DEFAULT_SETTLE_US,
        }
    }

    /// Set the backlight state
    pub const fn with_backlight(mut self, on: bool) -> Self {
        self.backlight = on;
        self
    }

    /// Set the display geometry
    pub const fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the enable-pulse settle time
    pub const fn with_settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    /// Check the config for values the driver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0x08..=0x77).contains(&self.address) {
            return Err(ConfigError::InvalidAddress);
        }
        let g = self.geometry;
        if g.lines == 0 || g.lines > MAX_LINES || g.columns == 0 || g.columns > MAX_COLUMNS {
            return Err(ConfigError::UnsupportedGeometry);
        }
        if self.settle_us == 0 {
            return Err(ConfigError::InvalidSettleTime);
        }
        Ok(())
    }
}

/// A fixed piece of text shown at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLine {
    /// Line to place the cursor on
    pub line: u8,
    /// Starting column
    pub column: u8,
    /// Text to write
    pub text: &'static str,
}

impl TextLine {
    /// Create a new text line
    pub const fn new(line: u8, column: u8, text: &'static str) -> Self {
        Self { line, column, text }
    }
}
