//! Shared hardware mock for host tests
//!
//! Implements both HAL traits over an in-memory pin bank and captures
//! the value on the data lines at every enable-line rising edge, which
//! is exactly what the real display latches.

use charlcd_hal::clock::{ClockControl, Peripheral};
use charlcd_hal::gpio::{Level, PinBank, PinConfig, PinId, Port};
use heapless::Vec;

use crate::pins::{BusWidth, DataPins, PinMap};

/// A 4-bit wiring map used across the tests
pub(crate) fn map_4bit() -> PinMap {
    PinMap {
        register_select: PinId::new(Port::A, 0),
        read_write: PinId::new(Port::A, 1),
        enable: PinId::new(Port::A, 2),
        data: DataPins::Four([
            PinId::new(Port::B, 4),
            PinId::new(Port::B, 5),
            PinId::new(Port::B, 6),
            PinId::new(Port::B, 7),
        ]),
    }
}

/// An 8-bit wiring map used across the tests
pub(crate) fn map_8bit() -> PinMap {
    PinMap {
        register_select: PinId::new(Port::A, 0),
        read_write: PinId::new(Port::A, 1),
        enable: PinId::new(Port::A, 2),
        data: DataPins::Eight([
            PinId::new(Port::B, 0),
            PinId::new(Port::B, 1),
            PinId::new(Port::B, 2),
            PinId::new(Port::B, 3),
            PinId::new(Port::B, 4),
            PinId::new(Port::B, 5),
            PinId::new(Port::B, 6),
            PinId::new(Port::B, 7),
        ]),
    }
}

/// Mock SoC: records configuration, clock, and latch activity
pub(crate) struct MockSoc {
    levels: [[bool; 16]; 4],
    rs: PinId,
    en: PinId,
    data: Vec<PinId, 8>,
    /// Pins configured so far, with the config applied
    pub(crate) configured: Vec<(PinId, PinConfig), 16>,
    /// Clock gates enabled so far (deduplicated)
    pub(crate) clocks: Vec<Peripheral, 8>,
    /// Total pin writes, for asserting quiet periods
    pub(crate) writes: usize,
    /// (register-select level, data-line value) at each strobe rise
    pub(crate) latched: Vec<(Level, u8), 64>,
}

impl MockSoc {
    pub(crate) fn new(map: &PinMap) -> Self {
        let mut data = Vec::new();
        for &pin in map.data.as_slice() {
            data.push(pin).unwrap();
        }
        Self {
            levels: [[false; 16]; 4],
            rs: map.register_select,
            en: map.enable,
            data,
            configured: Vec::new(),
            clocks: Vec::new(),
            writes: 0,
            latched: Vec::new(),
        }
    }

    fn port_index(port: Port) -> usize {
        match port {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
            Port::D => 3,
        }
    }

    fn is_high(&self, pin: PinId) -> bool {
        self.levels[Self::port_index(pin.port)][pin.pin as usize]
    }

    pub(crate) fn pin_level(&self, pin: PinId) -> Level {
        if self.is_high(pin) {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Current value on the data lines, lowest-order line in bit 0
    fn data_value(&self) -> u8 {
        self.data
            .iter()
            .enumerate()
            .fold(0, |acc, (bit, &pin)| acc | ((self.is_high(pin) as u8) << bit))
    }

    /// Latched bytes in transmission order, assembling nibble pairs on
    /// a 4-bit bus
    pub(crate) fn bytes(&self, width: BusWidth) -> Vec<(Level, u8), 32> {
        let mut out = Vec::new();
        match width {
            BusWidth::Eight => {
                for &(rs, value) in self.latched.iter() {
                    out.push((rs, value)).unwrap();
                }
            }
            BusWidth::Four => {
                for pair in self.latched.chunks(2) {
                    assert_eq!(pair.len(), 2, "dangling nibble");
                    assert_eq!(pair[0].0, pair[1].0, "register changed between nibbles");
                    out.push((pair[0].0, (pair[0].1 << 4) | pair[1].1)).unwrap();
                }
            }
        }
        out
    }
}

impl PinBank for MockSoc {
    fn configure(&mut self, pin: PinId, config: PinConfig) {
        self.configured.push((pin, config)).unwrap();
    }

    fn write(&mut self, pin: PinId, level: Level) {
        self.writes += 1;
        if pin == self.en && level == Level::High && !self.is_high(pin) {
            let rs = self.pin_level(self.rs);
            self.latched.push((rs, self.data_value())).unwrap();
        }
        self.levels[Self::port_index(pin.port)][pin.pin as usize] = level.is_high();
    }

    fn read(&mut self, pin: PinId) -> Level {
        self.pin_level(pin)
    }
}

impl ClockControl for MockSoc {
    fn enable_clock(&mut self, peripheral: Peripheral) {
        if !self.clocks.contains(&peripheral) {
            self.clocks.push(peripheral).unwrap();
        }
    }
}
