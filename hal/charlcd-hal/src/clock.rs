//! Peripheral clock gating
//!
//! GPIO ports sit behind a clock gate on most targets and must be
//! enabled before their registers respond.

use crate::gpio::Port;

/// Clock-gated peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    GpioA,
    GpioB,
    GpioC,
    GpioD,
}

impl From<Port> for Peripheral {
    /// The clock gate feeding a GPIO port
    fn from(port: Port) -> Self {
        match port {
            Port::A => Peripheral::GpioA,
            Port::B => Peripheral::GpioB,
            Port::C => Peripheral::GpioC,
            Port::D => Peripheral::GpioD,
        }
    }
}

/// Peripheral clock control
///
/// `enable_clock` must be idempotent: enabling an already-enabled
/// peripheral is a no-op, so callers are free to enable per pin without
/// tracking which ports they have already touched.
pub trait ClockControl {
    /// Enable the clock feeding a peripheral
    fn enable_clock(&mut self, peripheral: Peripheral);
}
