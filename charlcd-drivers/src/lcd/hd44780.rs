//! HD44780 instruction set and 4-bit framing
//!
//! Pure encoding helpers shared by the transport-specific drivers. Nothing
//! in here touches a bus.

/// HD44780 instructions and options
pub mod cmd {
    /// Clear display, cursor home
    pub const CLEAR: u8 = 0x01;
    /// Entry mode set
    pub const ENTRY_MODE: u8 = 0x04;
    /// Display on/off control
    pub const DISPLAY_CTRL: u8 = 0x08;
    /// Function set
    pub const FUNCTION_SET: u8 = 0x20;
    /// Function set option: two display lines
    pub const TWO_LINE: u8 = 0x08;
    /// Display control option: display on
    pub const DISPLAY_ON: u8 = 0x04;
    /// Set DDRAM address, line 0 base
    pub const LINE0_ADDR: u8 = 0x80;
    /// Set DDRAM address, line 1 base
    pub const LINE1_ADDR: u8 = 0xC0;
    /// Reset nibble, sent three times to resynchronise the interface
    pub const RESET: u8 = 0x03;
    /// Switch the interface to 4-bit mode
    pub const FOUR_BIT: u8 = 0x02;
}

/// PCF8574 control bits
pub mod bits {
    /// Backlight LED
    pub const BACKLIGHT: u8 = 0x08;
    /// Enable strobe
    pub const ENABLE: u8 = 0x04;
    /// Register select: character data
    pub const RS_DATA: u8 = 0x01;
}

/// Register selected for a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Instruction register
    Command = 0,
    /// Data register (character to display)
    Character = bits::RS_DATA,
}

/// Power-on initialization progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    /// Nothing sent yet
    #[default]
    Uninitialized,
    /// Reset nibbles and 4-bit switch sent
    FourBitHandshake,
    /// Entry mode configured
    EntryModeSet,
    /// Two-line function set sent
    FunctionSet,
    /// Display switched on
    DisplayOn,
    /// Display cleared, ready for text
    Ready,
}

/// One step of the initialization sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte to send
    pub command: u8,
    /// State reached once the command has been sent
    pub reaches: Option<InitState>,
}

impl InitStep {
    const fn new(command: u8, reaches: Option<InitState>) -> Self {
        Self { command, reaches }
    }
}

/// HD44780 power-on sequence for a 4-bit, two-line display
///
/// Order and values are fixed by the controller datasheet.
pub const INIT_SEQUENCE: [InitStep; 8] = [
    InitStep::new(cmd::RESET, None),
    InitStep::new(cmd::RESET, None),
    InitStep::new(cmd::RESET, None),
    InitStep::new(cmd::FOUR_BIT, Some(InitState::FourBitHandshake)),
    InitStep::new(cmd::ENTRY_MODE, Some(InitState::EntryModeSet)),
    InitStep::new(
        cmd::FUNCTION_SET | cmd::TWO_LINE,
        Some(InitState::FunctionSet),
    ),
    InitStep::new(
        cmd::DISPLAY_CTRL | cmd::DISPLAY_ON,
        Some(InitState::DisplayOn),
    ),
    InitStep::new(cmd::CLEAR, Some(InitState::Ready)),
];

/// Split a byte into the two expander writes that carry it
///
/// Returns `[high, low]`, each with the data nibble in bits 7-4, the mode in
/// bit 0 and the backlight bit if enabled. The enable bit is left clear.
pub const fn nibbles(data: u8, mode: Mode, backlight: bool) -> [u8; 2] {
    let flags = mode as u8 | if backlight { bits::BACKLIGHT } else { 0 };
    let high = flags | (data & 0xF0);
    let low = flags | ((data << 4) & 0xF0);
    [high, low]
}

/// DDRAM "set address" command for a cursor position
///
/// Line 0 maps to `0x80 + column`, every other line to `0xC0 + column`.
/// No bounds are applied; columns past the DDRAM window wrap the byte.
pub const fn cursor_address(line: u8, column: u8) -> u8 {
    let base = if line == 0 {
        cmd::LINE0_ADDR
    } else {
        cmd::LINE1_ADDR
    };
    base.wrapping_add(column)
}
