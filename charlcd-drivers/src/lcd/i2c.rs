//! HD44780 over a PCF8574 I2C backpack
//!
//! Blocking driver: every byte is sent as two nibbles, each written to the
//! expander and then latched with a settle / enable-high / settle /
//! enable-low / settle cycle. With the default 600 µs settle time one byte
//! costs at least 3.6 ms, dominated by the delays.
//!
//! Bus errors never cut a transfer short: every write and delay of a
//! sequence is still carried out, and the first error is returned once the
//! sequence is done.

use charlcd_core::config::{Geometry, LcdConfig};
use charlcd_core::traits::CharacterDisplay;
use charlcd_hal::I2cBus;
use embedded_hal::delay::DelayNs;

use super::hd44780::{self, bits, cmd, InitState, Mode, INIT_SEQUENCE};

/// HD44780 character LCD behind a PCF8574 expander
///
/// Owns its bus and delay provider; pass `&mut` references to share them.
pub struct I2cLcd<B, D> {
    bus: B,
    delay: D,
    config: LcdConfig,
    state: InitState,
}

impl<B: I2cBus, D: DelayNs> I2cLcd<B, D> {
    /// Create a new driver
    ///
    /// Nothing is sent until [`CharacterDisplay::initialize`] is called.
    pub fn new(bus: B, delay: D, config: LcdConfig) -> Self {
        Self {
            bus,
            delay,
            config,
            state: InitState::Uninitialized,
        }
    }

    /// Get the configuration this driver was built with
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Get initialization progress
    pub fn state(&self) -> InitState {
        self.state
    }

    /// Check whether initialization has completed
    pub fn is_ready(&self) -> bool {
        self.state == InitState::Ready
    }

    /// Give back the bus and delay provider
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Write one raw byte to the expander
    fn send_byte(&mut self, value: u8) -> Result<(), B::Error> {
        self.bus.write_byte(self.config.address, value)
    }

    /// Latch `value` into the controller with one enable pulse
    ///
    /// Writes the bus exactly twice: enable set, then enable cleared. The
    /// other bits of `value` are passed through unchanged. Enable is
    /// cleared even if setting it failed.
    pub fn toggle(&mut self, value: u8) -> Result<(), B::Error> {
        let settle = self.config.settle_us;
        self.delay.delay_us(settle);
        let set = self.send_byte(value | bits::ENABLE);
        self.delay.delay_us(settle);
        let cleared = self.send_byte(value & !bits::ENABLE);
        self.delay.delay_us(settle);
        set.and(cleared)
    }

    /// Send a full byte as two nibbles, high nibble first
    pub fn send(&mut self, data: u8, mode: Mode) -> Result<(), B::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("LCD send {=u8:#x} ({})", data, mode);

        let mut result = Ok(());
        for nibble in hd44780::nibbles(data, mode, self.config.backlight) {
            let written = self.send_byte(nibble);
            let latched = self.toggle(nibble);
            result = result.and(written).and(latched);
        }
        result
    }
}

impl<B: I2cBus, D: DelayNs> CharacterDisplay for I2cLcd<B, D> {
    type Error = B::Error;

    /// Run the 4-bit, two-line power-on sequence
    ///
    /// Every command is sent even after a bus error. [`I2cLcd::state`] then
    /// reports the last step reached before the first failure.
    fn initialize(&mut self) -> Result<(), Self::Error> {
        self.state = InitState::Uninitialized;

        let mut result = Ok(());
        for step in INIT_SEQUENCE {
            result = result.and(self.send(step.command, Mode::Command));
            if let (Ok(()), Some(state)) = (&result, step.reaches) {
                self.state = state;
            }
        }

        #[cfg(feature = "defmt")]
        match result {
            Ok(()) => defmt::debug!("LCD at {=u8:#x} initialized", self.config.address),
            Err(_) => defmt::warn!(
                "LCD at {=u8:#x} initialized with bus errors (reached {})",
                self.config.address,
                self.state
            ),
        }
        result
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.send(cmd::CLEAR, Mode::Command)
    }

    /// Move the cursor
    ///
    /// Positions outside the configured geometry are sent anyway (and
    /// logged); what the display shows for them is up to the controller.
    fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        if !self.config.geometry.contains(line, column) {
            defmt::warn!("LCD cursor ({}, {}) is off screen", line, column);
        }

        self.send(hd44780::cursor_address(line, column), Mode::Command)
    }

    fn show_char(&mut self, ch: u8) -> Result<(), Self::Error> {
        self.send(ch, Mode::Character)
    }

    fn geometry(&self) -> Geometry {
        self.config.geometry
    }
}
