//! I2C peripheral setup
//!
//! RP2040 has two I2C controllers (I2C0 and I2C1). Each GPIO can carry
//! exactly one I2C function, fixed by its pin number.

use charlcd_hal::{EhI2cBus, I2cConfig};
use embassy_rp::i2c::{self, Blocking, I2c, SclPin, SdaPin};
use embassy_rp::Peri;

/// Blocking RP2040 I2C master usable as a `charlcd_hal::I2cBus`
pub type RpI2cBus<'d, T> = EhI2cBus<I2c<'d, T, Blocking>>;

/// I2C peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cId {
    I2c0,
    I2c1,
}

/// Role of a GPIO in an I2C connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cLine {
    Sda,
    Scl,
}

/// Determine which I2C controller and line a GPIO can carry
///
/// The RP2040 function table repeats every four pins:
/// SDA0, SCL0, SDA1, SCL1.
pub const fn gpio_to_i2c(gpio: u8) -> Option<(I2cId, I2cLine)> {
    if gpio >= 30 {
        return None;
    }
    match gpio % 4 {
        0 => Some((I2cId::I2c0, I2cLine::Sda)),
        1 => Some((I2cId::I2c0, I2cLine::Scl)),
        2 => Some((I2cId::I2c1, I2cLine::Sda)),
        _ => Some((I2cId::I2c1, I2cLine::Scl)),
    }
}

/// Check that two GPIOs form an SDA/SCL pair on the same controller
pub const fn i2c_pair(sda: u8, scl: u8) -> Option<I2cId> {
    match (gpio_to_i2c(sda), gpio_to_i2c(scl)) {
        (Some((I2cId::I2c0, I2cLine::Sda)), Some((I2cId::I2c0, I2cLine::Scl))) => {
            Some(I2cId::I2c0)
        }
        (Some((I2cId::I2c1, I2cLine::Sda)), Some((I2cId::I2c1, I2cLine::Scl))) => {
            Some(I2cId::I2c1)
        }
        _ => None,
    }
}

/// Build the embassy-rp I2C config with internal pull-ups on both lines
pub fn peripheral_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg.sda_pullup = true;
    cfg.scl_pullup = true;
    cfg
}

/// Create a blocking I2C bus on the given controller and pins
pub fn new_bus<'d, T: i2c::Instance>(
    peri: Peri<'d, T>,
    scl: Peri<'d, impl SclPin<T>>,
    sda: Peri<'d, impl SdaPin<T>>,
    config: &I2cConfig,
) -> RpI2cBus<'d, T> {
    let i2c = I2c::new_blocking(peri, scl, sda, peripheral_config(config));
    EhI2cBus::new(i2c)
}
