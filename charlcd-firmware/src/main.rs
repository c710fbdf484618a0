//! charlcd - character LCD startup firmware
//!
//! Brings up the board's default I2C bus, initializes an HD44780 LCD
//! behind a PCF8574 backpack, writes the configured startup text once and
//! then idles forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::Peripherals;
use {defmt_rtt as _, panic_probe as _};

/// Display settings compiled from display.toml
mod config {
    use charlcd_core::config::{Geometry, LcdConfig, TextLine};
    use charlcd_hal::I2cConfig;

    include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("charlcd firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    show_startup_text(p);

    // Nothing left to do: the display keeps its contents on its own
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Initialize the display and write the startup text
///
/// Bus errors are logged and the sequence carries on; a failed step leaves
/// the display blank or garbled but never stops the firmware.
#[cfg(feature = "board-pico")]
fn show_startup_text(p: Peripherals) {
    use charlcd_core::traits::CharacterDisplay;
    use charlcd_drivers::lcd::I2cLcd;
    use charlcd_hal_rp2040::board::pico;

    if let Err(e) = config::LCD.validate() {
        error!("Invalid LCD config: {:?}", e);
        return;
    }

    let bus = pico::default_i2c(p, &config::I2C);
    info!(
        "I2C initialized: {:?} SDA=GP{} SCL=GP{} at {} Hz",
        pico::I2C,
        pico::SDA_PIN,
        pico::SCL_PIN,
        config::I2C.frequency
    );

    let mut lcd = I2cLcd::new(bus, embassy_time::Delay, config::LCD);

    match lcd.initialize() {
        Ok(()) => info!("LCD initialized at {=u8:#x}", config::LCD.address),
        Err(e) => error!(
            "LCD initialization had bus errors (reached {:?}): {:?}",
            lcd.state(),
            e
        ),
    }

    for line in config::TEXT {
        if let Err(e) = lcd.write_line(line) {
            error!("Failed to write \"{}\": {:?}", line.text, e);
        }
    }
    info!("Startup text written ({} lines)", config::TEXT.len());
}

/// Without default I2C pins there is nothing safe to drive
#[cfg(not(feature = "board-pico"))]
fn show_startup_text(_p: Peripherals) {
    warn!("No board with default I2C pins selected; display left untouched");
}
