//! Default I2C wiring for supported boards

/// Raspberry Pi Pico
///
/// The Pico SDK's default I2C is I2C0 on GP4 (SDA) and GP5 (SCL).
pub mod pico {
    use charlcd_hal::I2cConfig;
    use embassy_rp::peripherals::I2C0;
    use embassy_rp::Peripherals;

    use crate::i2c::{i2c_pair, new_bus, I2cId, RpI2cBus};

    /// Default I2C controller
    pub const I2C: I2cId = I2cId::I2c0;
    /// Default SDA pin
    pub const SDA_PIN: u8 = 4;
    /// Default SCL pin
    pub const SCL_PIN: u8 = 5;

    const _: () = assert!(matches!(i2c_pair(SDA_PIN, SCL_PIN), Some(I2cId::I2c0)));

    /// Take the default I2C controller and pins from the peripherals
    pub fn default_i2c(p: Peripherals, config: &I2cConfig) -> RpI2cBus<'static, I2C0> {
        new_bus(p.I2C0, p.PIN_5, p.PIN_4, config)
    }
}
