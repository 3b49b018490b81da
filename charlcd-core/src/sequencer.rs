//! Pin sequencer: one bus phase per tick
//!
//! Presenting a value to the display takes several pin operations with
//! settling time between them: select the target register, select the
//! write direction, park the enable line, put the bits on the data
//! lines, then strobe enable high and low to latch them. The sequencer
//! executes exactly one of those phases per call, so a full nibble or
//! byte pass spreads across as many ticks as it has phases and the
//! caller never blocks.

use charlcd_hal::gpio::{Level, PinBank};

use crate::pins::{BusWidth, DataPins, PinMap};

/// Destination register on the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Instruction register
    Command,
    /// Character data register
    Data,
}

impl Register {
    /// Level to drive on the register-select line
    pub const fn level(self) -> Level {
        match self {
            Register::Command => Level::Low,
            Register::Data => Level::High,
        }
    }
}

/// Progress of a multi-tick transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// More ticks required
    Pending,
    /// Finished on this tick
    Done,
}

/// Which data pass of the current byte is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Control-line setup plus the high nibble (or the full byte on an
    /// 8-bit bus)
    First,
    /// Low nibble, 4-bit bus only; control lines are already set
    Second,
}

/// One pin operation within a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SelectRegister,
    SelectWrite,
    StrobeSetup,
    Present,
    StrobeHigh,
    StrobeLow,
}

impl Phase {
    fn next(self) -> Option<Phase> {
        match self {
            Phase::SelectRegister => Some(Phase::SelectWrite),
            Phase::SelectWrite => Some(Phase::StrobeSetup),
            Phase::StrobeSetup => Some(Phase::Present),
            Phase::Present => Some(Phase::StrobeHigh),
            Phase::StrobeHigh => Some(Phase::StrobeLow),
            Phase::StrobeLow => None,
        }
    }
}

/// Cooperative phase machine for one nibble/byte pass
///
/// `step` performs the pin operation of the current phase and advances.
/// It reports [`Progress::Done`] on the phase that completes a pass;
/// the counter then wraps so the next call starts the following pass
/// (or the next byte).
#[derive(Debug)]
pub struct PinSequencer {
    phase: Phase,
    pass: Pass,
}

impl PinSequencer {
    pub const fn new() -> Self {
        Self {
            phase: Phase::SelectRegister,
            pass: Pass::First,
        }
    }

    /// Execute exactly one phase of the transfer of `byte`
    ///
    /// The same byte must be presented on every call until the final
    /// pass reports done; the sequencer extracts the nibble the current
    /// pass needs.
    pub fn step<B: PinBank>(
        &mut self,
        bank: &mut B,
        pins: &PinMap,
        byte: u8,
        register: Register,
    ) -> Progress {
        match self.phase {
            Phase::SelectRegister => bank.write(pins.register_select, register.level()),
            Phase::SelectWrite => bank.write(pins.read_write, Level::Low),
            Phase::StrobeSetup => bank.write(pins.enable, Level::Low),
            Phase::Present => self.present(bank, pins, byte),
            Phase::StrobeHigh => bank.write(pins.enable, Level::High),
            Phase::StrobeLow => bank.write(pins.enable, Level::Low),
        }

        match self.phase.next() {
            Some(next) => {
                self.phase = next;
                Progress::Pending
            }
            None => {
                // Pass finished; a 4-bit bus still owes the low nibble,
                // which needs no control-line setup.
                match (pins.width(), self.pass) {
                    (BusWidth::Four, Pass::First) => {
                        self.pass = Pass::Second;
                        self.phase = Phase::Present;
                    }
                    _ => {
                        self.pass = Pass::First;
                        self.phase = Phase::SelectRegister;
                    }
                }
                Progress::Done
            }
        }
    }

    fn present<B: PinBank>(&self, bank: &mut B, pins: &PinMap, byte: u8) {
        match (&pins.data, self.pass) {
            (DataPins::Four(lines), Pass::First) => {
                for (bit, line) in lines.iter().enumerate() {
                    bank.write(*line, Level::from_bit(byte, 4 + bit as u8));
                }
            }
            (DataPins::Four(lines), Pass::Second) => {
                for (bit, line) in lines.iter().enumerate() {
                    bank.write(*line, Level::from_bit(byte, bit as u8));
                }
            }
            (DataPins::Eight(lines), _) => {
                for (bit, line) in lines.iter().enumerate() {
                    bank.write(*line, Level::from_bit(byte, bit as u8));
                }
            }
        }
    }
}

impl Default for PinSequencer {
    fn default() -> Self {
        Self::new()
    }
}
