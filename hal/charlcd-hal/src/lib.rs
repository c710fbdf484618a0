//! charlcd Hardware Abstraction Layer
//!
//! This crate defines the bus capability that the LCD driver is written
//! against. Chip-specific HALs implement it over real hardware; tests
//! implement it as an in-memory recorder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  charlcd-firmware (main sequence)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-drivers (HD44780 over PCF8574) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ charlcd-hal-rp2040  │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master writes

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{EhI2cBus, I2cBus, I2cBusError, I2cConfig};
