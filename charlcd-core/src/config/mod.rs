//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills these in
//! from `display.toml` at build time.

pub mod lcd;

pub use lcd::*;
