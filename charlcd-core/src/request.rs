//! Request lifecycle types
//!
//! The driver services exactly one request at a time: a request is
//! accepted only when the driver is in the right top-level state and
//! nothing else is outstanding, and its completion is reported through
//! the callback stored alongside it.

use crate::digits::DigitProducer;

/// Top-level driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Power-on state; only `init` is accepted
    Off,
    /// Init sequencer running
    Initializing,
    /// Steady state; operation requests accepted. There is no way back.
    Operational,
}

/// Errors returned synchronously by the submit calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Row or column outside the display's addressable range
    InvalidArgument,
    /// Driver busy with another request, or in the wrong state for
    /// this request kind
    NotReady,
}

/// Completion notification for an accepted request
///
/// Fires exactly once, inside the [`tick`](crate::Lcd::tick) call that
/// retires the request. The driver is already idle when the callback
/// runs, so the application may submit its next request as soon as that
/// `tick` returns.
pub type Callback = fn();

/// The single outstanding operation, with its progress state
#[derive(Debug)]
pub(crate) enum Pending<'a> {
    /// Clear the whole display
    Clear,
    /// Move the cursor to a precomputed DDRAM address
    SetCursor { address: u8 },
    /// Send a raw command byte
    Command { byte: u8 },
    /// Send a borrowed string, one data byte per completed transfer
    WriteStr { text: &'a str, index: usize },
    /// Send the decimal digits of an unsigned integer
    WriteNumber {
        digits: DigitProducer,
        current: Option<u8>,
    },
}
