//! Sampler board support library.
//!
//! Pin-role tables for the two board variants and the boot-time pin
//! initializer. `no_std` unless the `std` feature (host tooling) is on; the
//! register adapter and firmware entry live behind the `avr` feature.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
