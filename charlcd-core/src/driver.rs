//! Driver context, submit API, and the periodic tick entry point

use charlcd_hal::clock::ClockControl;
use charlcd_hal::gpio::PinBank;

use crate::command;
use crate::digits::DigitProducer;
use crate::init::InitSequencer;
use crate::pins::PinMap;
use crate::request::{Callback, DriverState, Error, Pending};
use crate::sequencer::{Progress, Register};
use crate::transmit::ByteTransmitter;

/// Character-display driver context
///
/// Owns the pin bank, the wiring map, and the single request slot. The
/// embedding application calls [`Lcd::tick`] once per fixed period; the
/// submit calls return synchronously and the actual bus work happens
/// across subsequent ticks. Because the context is one owned value
/// threaded through `&mut`, submission and ticking cannot race: the
/// caller's own scheduling serializes them.
///
/// The `'a` lifetime bounds string payloads: a string handed to
/// [`Lcd::write_str`] is borrowed until its completion callback fires.
pub struct Lcd<'a, B> {
    bank: B,
    pins: PinMap,
    state: DriverState,
    pending: Option<Pending<'a>>,
    callback: Option<Callback>,
    init: InitSequencer,
    tx: ByteTransmitter,
}

impl<'a, B: PinBank + ClockControl> Lcd<'a, B> {
    /// Create a driver over a pin bank and a wiring map
    ///
    /// The display is untouched until [`Lcd::init`] is submitted and
    /// ticked to completion.
    pub fn new(bank: B, pins: PinMap) -> Self {
        Self {
            bank,
            pins,
            state: DriverState::Off,
            pending: None,
            callback: None,
            init: InitSequencer::new(),
            tx: ByteTransmitter::new(),
        }
    }

    /// Current top-level driver state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether a request (including initialization) is outstanding
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.state == DriverState::Initializing
    }

    /// Access the underlying pin bank
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Begin the power-on initialization sequence
    ///
    /// Accepted only in the `Off` state. The driver is `Operational`
    /// and idle by the time the callback fires; it never returns to
    /// `Off`.
    pub fn init(&mut self, callback: Callback) -> Result<(), Error> {
        if self.state != DriverState::Off || self.is_busy() {
            return Err(Error::NotReady);
        }
        self.callback = Some(callback);
        self.state = DriverState::Initializing;
        Ok(())
    }

    /// Clear the whole display
    pub fn clear(&mut self, callback: Callback) -> Result<(), Error> {
        self.accept(Pending::Clear, callback)
    }

    /// Move the cursor to `row` (0-1), `column` (0-39)
    ///
    /// Range errors are reported before any state changes, so a
    /// rejected call leaves the driver exactly as it was.
    pub fn set_cursor(&mut self, row: u8, column: u8, callback: Callback) -> Result<(), Error> {
        if row >= command::LINES || column >= command::COLUMNS_PER_LINE {
            return Err(Error::InvalidArgument);
        }
        let address = match row {
            0 => column,
            _ => command::LINE_TWO_ADDRESS + column,
        };
        self.accept(Pending::SetCursor { address }, callback)
    }

    /// Send a raw command byte
    pub fn command(&mut self, byte: u8, callback: Callback) -> Result<(), Error> {
        self.accept(Pending::Command { byte }, callback)
    }

    /// Print a string at the current cursor position
    ///
    /// `text` is borrowed until the callback fires; it is read one byte
    /// per completed transfer and never copied.
    pub fn write_str(&mut self, text: &'a str, callback: Callback) -> Result<(), Error> {
        self.accept(Pending::WriteStr { text, index: 0 }, callback)
    }

    /// Print an unsigned integer in decimal
    pub fn write_number(&mut self, value: u64, callback: Callback) -> Result<(), Error> {
        self.accept(
            Pending::WriteNumber {
                digits: DigitProducer::new(value),
                current: None,
            },
            callback,
        )
    }

    fn accept(&mut self, request: Pending<'a>, callback: Callback) -> Result<(), Error> {
        if self.state != DriverState::Operational || self.pending.is_some() {
            return Err(Error::NotReady);
        }
        self.pending = Some(request);
        self.callback = Some(callback);
        Ok(())
    }

    /// Periodic entry point
    ///
    /// Performs at most a handful of pin operations and returns; every
    /// state machine below advances by exactly one unit of work.
    pub fn tick(&mut self) {
        match self.state {
            DriverState::Off => {}
            DriverState::Initializing => {
                if self.init.tick(&mut self.bank, &self.pins) == Progress::Done {
                    self.state = DriverState::Operational;
                    self.retire();
                }
            }
            DriverState::Operational => self.service(),
        }
    }

    /// One tick of the handler matching the pending request kind
    fn service(&mut self) {
        let done = match &mut self.pending {
            None => return,
            Some(Pending::Clear) => {
                self.tx
                    .send(&mut self.bank, &self.pins, command::CLEAR_DISPLAY, Register::Command)
                    == Progress::Done
            }
            Some(Pending::SetCursor { address }) => {
                let byte = command::SET_DDRAM_ADDRESS | *address;
                self.tx.send(&mut self.bank, &self.pins, byte, Register::Command) == Progress::Done
            }
            Some(Pending::Command { byte }) => {
                let byte = *byte;
                self.tx.send(&mut self.bank, &self.pins, byte, Register::Command) == Progress::Done
            }
            Some(Pending::WriteStr { text, index }) => {
                let bytes = text.as_bytes();
                if *index >= bytes.len() {
                    // Empty string: nothing to transmit
                    true
                } else {
                    match self.tx.send(&mut self.bank, &self.pins, bytes[*index], Register::Data) {
                        Progress::Pending => false,
                        Progress::Done => {
                            *index += 1;
                            *index == bytes.len()
                        }
                    }
                }
            }
            Some(Pending::WriteNumber { digits, current }) => {
                if current.is_none() {
                    *current = digits.next_digit();
                }
                match *current {
                    None => true,
                    Some(digit) => {
                        let ascii = b'0' + digit;
                        match self.tx.send(&mut self.bank, &self.pins, ascii, Register::Data) {
                            Progress::Pending => false,
                            Progress::Done => {
                                *current = digits.next_digit();
                                current.is_none()
                            }
                        }
                    }
                }
            }
        };

        if done {
            self.retire();
        }
    }

    /// Terminal protocol shared by every handler: return to idle first,
    /// then notify, so the callback observes a driver ready for the
    /// next request.
    fn retire(&mut self) {
        self.pending = None;
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}
