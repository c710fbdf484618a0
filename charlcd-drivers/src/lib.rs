//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in charlcd-core:
//!
//! - HD44780 character LCD behind a PCF8574 I2C expander

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;
