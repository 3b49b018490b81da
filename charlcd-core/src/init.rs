//! Power-on initialization sequencer
//!
//! Reproduces the display's reset timing contract without blocking:
//! configure the pins, sit out the post-power-on settling window, then
//! walk a fixed command script, holding on each command until the byte
//! transmitter finishes it and inserting explicit settle gaps where the
//! datasheet demands them. Stage delays are counted in ticks; the tick
//! period is the system's time unit.

use charlcd_hal::clock::ClockControl;
use charlcd_hal::gpio::{Level, Mode, PinBank, PinConfig, Speed};

use crate::command;
use crate::pins::{BusWidth, PinMap};
use crate::sequencer::{Progress, Register};
use crate::transmit::ByteTransmitter;

/// Ticks to sit out after pin configuration before the first command
/// (stands in for the >30 ms power-on delay)
const POWER_ON_SETTLE_TICKS: u8 = 30;

/// One scripted command and the settle gap that follows it
struct ScriptEntry {
    byte: u8,
    settle_ticks: u8,
}

/// 4-bit bring-up: the two-step wake-up handshake first, then the
/// standard configuration tail
const SCRIPT_4BIT: &[ScriptEntry] = &[
    ScriptEntry { byte: command::WAKE_4BIT_FIRST, settle_ticks: 4 },
    ScriptEntry { byte: command::WAKE_4BIT_SECOND, settle_ticks: 0 },
    ScriptEntry { byte: command::FUNCTION_SET_4BIT_2LINE_5X7, settle_ticks: 0 },
    ScriptEntry { byte: command::DISPLAY_ON_CURSOR_OFF, settle_ticks: 0 },
    ScriptEntry { byte: command::CLEAR_DISPLAY, settle_ticks: 1 },
    ScriptEntry { byte: command::ENTRY_MODE_INCREMENT, settle_ticks: 0 },
];

/// 8-bit bring-up: no handshake needed, the bus is full width from the
/// first byte
const SCRIPT_8BIT: &[ScriptEntry] = &[
    ScriptEntry { byte: command::FUNCTION_SET_8BIT_2LINE_5X7, settle_ticks: 0 },
    ScriptEntry { byte: command::DISPLAY_ON_CURSOR_OFF, settle_ticks: 0 },
    ScriptEntry { byte: command::CLEAR_DISPLAY, settle_ticks: 1 },
    ScriptEntry { byte: command::ENTRY_MODE_INCREMENT, settle_ticks: 0 },
];

const fn script_for(width: BusWidth) -> &'static [ScriptEntry] {
    match width {
        BusWidth::Four => SCRIPT_4BIT,
        BusWidth::Eight => SCRIPT_8BIT,
    }
}

/// Initialization stage
#[derive(Debug, Clone, Copy)]
enum Stage {
    /// Enable port clocks, configure every mapped pin, drive it low
    ConfigurePins,
    /// Burn ticks until the display has settled after power-on
    PowerOnSettle { remaining: u8 },
    /// Transmit the script entry at `index`, one phase per tick
    SendCommand { index: u8 },
    /// Explicit inter-command settle gap, then resume the script
    Settle { remaining: u8, resume: u8 },
}

/// Cooperative bring-up state machine
///
/// Runs to completion exactly once; the driver never re-enters it after
/// reporting done.
#[derive(Debug)]
pub struct InitSequencer {
    stage: Stage,
    tx: ByteTransmitter,
}

impl InitSequencer {
    pub const fn new() -> Self {
        Self {
            stage: Stage::ConfigurePins,
            tx: ByteTransmitter::new(),
        }
    }

    /// Advance one stage-tick; [`Progress::Done`] once the whole
    /// sequence has completed
    pub fn tick<B: PinBank + ClockControl>(&mut self, bank: &mut B, pins: &PinMap) -> Progress {
        self.run(bank, pins, script_for(pins.width()))
    }

    fn run<B: PinBank + ClockControl>(
        &mut self,
        bank: &mut B,
        pins: &PinMap,
        script: &[ScriptEntry],
    ) -> Progress {
        match self.stage {
            Stage::ConfigurePins => {
                let config = PinConfig {
                    speed: Speed::High,
                    mode: Mode::OutputPushPull,
                };
                for pin in pins.pins() {
                    // Idempotent, so enabling per pin is fine
                    bank.enable_clock(pin.port.into());
                    bank.configure(pin, config);
                    bank.write(pin, Level::Low);
                }
                self.stage = Stage::PowerOnSettle {
                    remaining: POWER_ON_SETTLE_TICKS,
                };
                Progress::Pending
            }
            Stage::PowerOnSettle { remaining } => {
                self.stage = if remaining > 1 {
                    Stage::PowerOnSettle {
                        remaining: remaining - 1,
                    }
                } else {
                    Stage::SendCommand { index: 0 }
                };
                Progress::Pending
            }
            Stage::SendCommand { index } => {
                let entry = &script[index as usize];
                match self.tx.send(bank, pins, entry.byte, Register::Command) {
                    Progress::Pending => Progress::Pending,
                    Progress::Done => {
                        let next = index + 1;
                        if entry.settle_ticks > 0 {
                            self.stage = Stage::Settle {
                                remaining: entry.settle_ticks,
                                resume: next,
                            };
                            Progress::Pending
                        } else if (next as usize) < script.len() {
                            self.stage = Stage::SendCommand { index: next };
                            Progress::Pending
                        } else {
                            self.stage = Stage::ConfigurePins;
                            Progress::Done
                        }
                    }
                }
            }
            Stage::Settle { remaining, resume } => {
                if remaining > 1 {
                    self.stage = Stage::Settle {
                        remaining: remaining - 1,
                        resume,
                    };
                    Progress::Pending
                } else if (resume as usize) < script.len() {
                    self.stage = Stage::SendCommand { index: resume };
                    Progress::Pending
                } else {
                    // A trailing settle gap ends the sequence
                    self.stage = Stage::ConfigurePins;
                    Progress::Done
                }
            }
        }
    }
}

impl Default for InitSequencer {
    fn default() -> Self {
        Self::new()
    }
}
