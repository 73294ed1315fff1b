//! Adapters — the only code that touches real (or simulated) hardware.
//!
//! - [`sim::SimPort`]: host model of an AVR port, used by the simulator and tests.
//! - `avr::AvrPort`: register adapter, built with the `avr` feature.

#[cfg(feature = "avr")]
pub mod avr;
pub mod sim;
