//! Character LCD drivers
//!
//! The HD44780 is wired to a PCF8574 I2C expander in 4-bit mode:
//!
//! ```text
//! PCF8574:  P7  P6  P5  P4  P3  P2  P1  P0
//! HD44780:  D7  D6  D5  D4  BL  E   RW  RS
//! ```
//!
//! Every expander write carries one nibble on the upper four bits plus the
//! control lines, so one controller byte costs two nibbles, each latched by
//! an enable pulse.

pub mod hd44780;
pub mod i2c;

pub use hd44780::{InitState, Mode};
pub use i2c::I2cLcd;
