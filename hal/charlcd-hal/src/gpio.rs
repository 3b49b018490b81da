//! GPIO pin-bank abstraction
//!
//! The display driver addresses pins by port letter and pin number, the
//! way a wiring table is written down, rather than holding an owned pin
//! object per line. A single [`PinBank`] implementation fronts the whole
//! bank and performs the actual register manipulation.

/// GPIO port identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
}

/// A single pin, addressed by port and pin number (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    pub pin: u8,
}

impl PinId {
    /// Create a pin id from a port and a pin number
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

/// Digital logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level of bit `bit` (0-7) within `byte`
    pub const fn from_bit(byte: u8, bit: u8) -> Self {
        if byte & (1 << bit) != 0 {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Pin operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Floating digital input
    InputFloating,
    /// Input with internal pull-up
    InputPullUp,
    /// Input with internal pull-down
    InputPullDown,
    /// Push-pull digital output
    OutputPushPull,
    /// Open-drain digital output
    OutputOpenDrain,
    /// Alternate peripheral function (function number is chip-specific)
    Alternate(u8),
    /// Analog mode
    Analog,
}

/// Pin configuration record
///
/// One record shape serves every pin the driver touches, whatever the
/// bus width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub speed: Speed,
    pub mode: Mode,
}

impl Default for PinConfig {
    /// The hardware reset state: a slow floating input
    fn default() -> Self {
        Self {
            speed: Speed::Low,
            mode: Mode::InputFloating,
        }
    }
}

/// Port/pin-indexed digital I/O
///
/// Implementations perform the register manipulation for the specific
/// chip. The driver assumes a correctly configured bank never fails, so
/// the operations are infallible; an implementation that can detect a
/// miswired pin should treat it as a fatal precondition violation rather
/// than report it here.
pub trait PinBank {
    /// Apply a configuration to a pin
    fn configure(&mut self, pin: PinId, config: PinConfig);

    /// Drive an output pin to a level
    fn write(&mut self, pin: PinId, level: Level);

    /// Read the current level of a pin
    fn read(&mut self, pin: PinId) -> Level;
}
