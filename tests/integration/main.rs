//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the pin map or the boot
//! initializer against mock ports. All tests run on the host with no real
//! hardware required.

mod pin_map_tests;
#[cfg(feature = "std")]
mod sim_cli_tests;
