//! Hardware abstraction traits for the charlcd display driver
//!
//! This crate defines the two hardware facilities the driver consumes,
//! so that the same driver core can run against any chip-specific GPIO
//! implementation (or a mock, for host tests).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (periodic tick loop)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-core (driver state machines)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          chip-specific GPIO / RCC
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinBank`] - port/pin-indexed digital I/O
//! - [`clock::ClockControl`] - peripheral clock gating

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key items at crate root for convenience
pub use clock::{ClockControl, Peripheral};
pub use gpio::{Level, Mode, PinBank, PinConfig, PinId, Port, Speed};
