//! RP2040-specific HAL for the charlcd firmware
//!
//! This crate provides the RP2040 implementation of the shared
//! `charlcd-hal` traits, plus RP2040-specific functionality:
//!
//! - Blocking I2C master bus (implements `charlcd_hal::I2cBus`)
//! - GPIO to I2C function mapping
//! - Default pin wiring for supported boards

#![no_std]

pub mod board;
pub mod i2c;

// Re-export shared traits from charlcd-hal for convenience
pub use charlcd_hal::{I2cBus, I2cBusError, I2cConfig};
