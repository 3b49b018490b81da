//! Board-agnostic non-blocking driver core for HD44780-class character
//! displays on a parallel bus
//!
//! The display needs microsecond/millisecond-scale settling around every
//! bus operation. Instead of delay loops, each transaction is staged as
//! a cooperative state machine that performs exactly one bus phase per
//! call to [`Lcd::tick`], which the embedding application invokes from
//! its periodic scheduler. One request is in flight at a time and its
//! completion is reported through a per-request callback.
//!
//! ```text
//! submit (init / clear / set_cursor / command / write_str / write_number)
//!          │
//!          ▼
//! ┌────────────────┐  tick  ┌─────────────────────┐   ┌─────────────┐
//! │  Lcd context   │ ─────► │ init sequencer /    │ ─► │ byte        │
//! │ (one request)  │        │ operation handler   │   │ transmitter │
//! └────────────────┘        └─────────────────────┘   └──────┬──────┘
//!                                                           ▼
//!                                                     pin sequencer
//!                                                 (one phase per tick)
//! ```
//!
//! Hardware access goes through the [`charlcd_hal`] traits, so the core
//! is fully testable on the host against a mock pin bank.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod digits;
pub mod driver;
pub mod init;
pub mod pins;
pub mod request;
pub mod sequencer;
pub mod transmit;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the driver surface at crate root for convenience
pub use digits::DigitProducer;
pub use driver::Lcd;
pub use pins::{BusWidth, DataPins, PinMap};
pub use request::{Callback, DriverState, Error};
pub use sequencer::{Progress, Register};
pub use transmit::ByteTransmitter;
