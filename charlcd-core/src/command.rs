//! HD44780 instruction bytes and display geometry
//!
//! The controller has no registers to read back; everything is driven
//! by writing instruction bytes. Listed here are the bytes the driver
//! issues itself, the vocabulary for the raw command path, and the
//! addressing constants for a two-line module.

/// Clear the display and reset the address counter
pub const CLEAR_DISPLAY: u8 = 0x01;
/// Return cursor and display shift to the home position
pub const RETURN_HOME: u8 = 0x02;
/// Entry mode: increment the address counter, no display shift
pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
/// Display on, cursor off, blink off
pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
/// Function set: 4-bit bus, two lines, 5x7 font
pub const FUNCTION_SET_4BIT_2LINE_5X7: u8 = 0x28;
/// Function set: 8-bit bus, two lines, 5x7 font
pub const FUNCTION_SET_8BIT_2LINE_5X7: u8 = 0x38;
/// First byte of the two-step 4-bit wake-up handshake
pub const WAKE_4BIT_FIRST: u8 = 0x33;
/// Second byte of the two-step 4-bit wake-up handshake
pub const WAKE_4BIT_SECOND: u8 = 0x32;
/// Set-DDRAM-address opcode; OR with the target address
pub const SET_DDRAM_ADDRESS: u8 = 0x80;

/// DDRAM address of the first character of the second line
pub const LINE_TWO_ADDRESS: u8 = 0x40;
/// Number of display lines
pub const LINES: u8 = 2;
/// Addressable columns per line
pub const COLUMNS_PER_LINE: u8 = 40;
