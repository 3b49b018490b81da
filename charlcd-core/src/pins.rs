//! Display wiring map
//!
//! Names the pin behind each display line. The choice of four or eight
//! data pins fixes the bus width for the lifetime of the driver; every
//! state machine downstream asks the map which width it is running at.

use charlcd_hal::gpio::PinId;

/// Parallel bus width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusWidth {
    Four,
    Eight,
}

impl BusWidth {
    /// Data passes needed to move one byte across the bus
    pub const fn passes(self) -> u8 {
        match self {
            BusWidth::Four => 2,
            BusWidth::Eight => 1,
        }
    }

    /// Ticks consumed transmitting one full byte
    pub const fn ticks_per_byte(self) -> u8 {
        match self {
            BusWidth::Four => 9,
            BusWidth::Eight => 6,
        }
    }
}

/// Data-line assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataPins {
    /// D4-D7, in that order
    Four([PinId; 4]),
    /// D0-D7, in that order
    Eight([PinId; 8]),
}

impl DataPins {
    /// The bus width this assignment implies
    pub const fn width(&self) -> BusWidth {
        match self {
            DataPins::Four(_) => BusWidth::Four,
            DataPins::Eight(_) => BusWidth::Eight,
        }
    }

    /// The data pins, lowest-order line first
    pub fn as_slice(&self) -> &[PinId] {
        match self {
            DataPins::Four(pins) => pins,
            DataPins::Eight(pins) => pins,
        }
    }
}

/// Complete wiring map for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Register-select line (low = command, high = data)
    pub register_select: PinId,
    /// Read/write-select line (held low; the driver only writes)
    pub read_write: PinId,
    /// Enable line; a high-then-low strobe latches the data lines
    pub enable: PinId,
    /// Data lines
    pub data: DataPins,
}

impl PinMap {
    /// The bus width this map is wired for
    pub const fn width(&self) -> BusWidth {
        self.data.width()
    }

    /// Every mapped pin: control lines first, then data lines
    pub fn pins(&self) -> impl Iterator<Item = PinId> + '_ {
        [self.register_select, self.read_write, self.enable]
            .into_iter()
            .chain(self.data.as_slice().iter().copied())
    }
}
