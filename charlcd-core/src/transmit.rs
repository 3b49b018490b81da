//! Byte transmitter
//!
//! Drives the pin sequencer for as many passes as the bus width needs
//! (two nibbles on a 4-bit bus, one pass on an 8-bit bus) and reports
//! byte-level progress: exactly 9 ticks per byte at 4 bits, 6 ticks at
//! 8 bits, regardless of the byte value.

use charlcd_hal::gpio::PinBank;

use crate::pins::PinMap;
use crate::sequencer::{PinSequencer, Progress, Register};

/// Multi-tick transmitter for one byte at a time
///
/// Stateless across bytes: once a byte reports [`Progress::Done`] the
/// internal counters are back at their initial values, ready for the
/// next byte.
#[derive(Debug)]
pub struct ByteTransmitter {
    sequencer: PinSequencer,
    passes_done: u8,
}

impl ByteTransmitter {
    pub const fn new() -> Self {
        Self {
            sequencer: PinSequencer::new(),
            passes_done: 0,
        }
    }

    /// Advance the transfer of `byte` by one phase
    ///
    /// Returns [`Progress::Done`] on the tick the final phase executes.
    /// The caller must present the same byte and register on every tick
    /// of one transfer.
    pub fn send<B: PinBank>(
        &mut self,
        bank: &mut B,
        pins: &PinMap,
        byte: u8,
        register: Register,
    ) -> Progress {
        match self.sequencer.step(bank, pins, byte, register) {
            Progress::Pending => Progress::Pending,
            Progress::Done => {
                self.passes_done += 1;
                if self.passes_done == pins.width().passes() {
                    self.passes_done = 0;
                    Progress::Done
                } else {
                    Progress::Pending
                }
            }
        }
    }
}

impl Default for ByteTransmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use charlcd_hal::gpio::Level;

    use super::*;
    use crate::pins::PinMap;
    use crate::testutil::{map_4bit, map_8bit, MockSoc};

    fn ticks_to_done(map: &PinMap, byte: u8, register: Register) -> (MockSoc, usize) {
        let mut soc = MockSoc::new(map);
        let mut tx = ByteTransmitter::new();
        for tick in 1..=32 {
            if tx.send(&mut soc, map, byte, register) == Progress::Done {
                return (soc, tick);
            }
        }
        panic!("byte never completed");
    }

    #[test]
    fn test_nine_ticks_per_byte_on_four_bit_bus() {
        let map = map_4bit();
        // Deterministic for any byte value
        for byte in [0x00, 0x01, 0x55, 0xAA, 0xFF] {
            let (soc, ticks) = ticks_to_done(&map, byte, Register::Command);
            assert_eq!(ticks, 9);
            assert_eq!(soc.bytes(map.width()).as_slice(), &[(Level::Low, byte)]);
        }
    }

    #[test]
    fn test_six_ticks_per_byte_on_eight_bit_bus() {
        let map = map_8bit();
        for byte in [0x00, 0x3C, 0xFF] {
            let (soc, ticks) = ticks_to_done(&map, byte, Register::Command);
            assert_eq!(ticks, 6);
            assert_eq!(soc.bytes(map.width()).as_slice(), &[(Level::Low, byte)]);
        }
    }

    #[test]
    fn test_data_register_latches_with_rs_high() {
        let map = map_4bit();
        let (soc, _) = ticks_to_done(&map, b'A', Register::Data);
        assert_eq!(soc.bytes(map.width()).as_slice(), &[(Level::High, b'A')]);
    }

    #[test]
    fn test_back_to_back_bytes() {
        let map = map_4bit();
        let mut soc = MockSoc::new(&map);
        let mut tx = ByteTransmitter::new();

        for byte in [0x12, 0x34] {
            let mut ticks = 0;
            loop {
                ticks += 1;
                if tx.send(&mut soc, &map, byte, Register::Command) == Progress::Done {
                    break;
                }
            }
            assert_eq!(ticks, 9);
        }

        let sent = soc.bytes(map.width());
        assert_eq!(sent.as_slice(), &[(Level::Low, 0x12), (Level::Low, 0x34)]);
    }
}
