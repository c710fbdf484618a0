//! Board-agnostic core for the charlcd firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip or LCD controller:
//!
//! - Display configuration types (address, geometry, timing)
//! - The character display trait implemented by the drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;
