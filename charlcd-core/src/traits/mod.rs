//! Hardware abstraction traits
//!
//! These traits define the interface between the main sequence and the
//! controller-specific display drivers.

pub mod display;

pub use display::CharacterDisplay;
