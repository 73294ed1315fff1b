//! Pin-number addressed GPIO port abstraction.
//!
//! Models an AVR-style port: each pin has a direction bit (DDR) and a latch
//! bit (PORT). On an output the latch is the driven level; on an input a
//! HIGH latch enables the pull-up. The boot initializer is written against
//! [`GpioPort`] so it runs unchanged on the register adapter and on the host
//! simulator.

use embedded_hal::digital::PinState;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Input,
    Output,
}

/// Direction and latch of one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinConfig {
    pub direction: Direction,
    #[serde(serialize_with = "serialize_pin_state")]
    pub latch: PinState,
}

impl PinConfig {
    /// AVR reset state: input, pull-up off.
    pub const FLOATING: Self = Self { direction: Direction::Input, latch: PinState::Low };
    pub const INPUT_PULL_UP: Self = Self { direction: Direction::Input, latch: PinState::High };
    pub const OUTPUT_LOW: Self = Self { direction: Direction::Output, latch: PinState::Low };
    pub const OUTPUT_HIGH: Self = Self { direction: Direction::Output, latch: PinState::High };

    pub fn is_output(self) -> bool {
        self.direction == Direction::Output
    }

    pub fn pull_up(self) -> bool {
        self.direction == Direction::Input && self.latch == PinState::High
    }

    /// Level actively driven onto the pin, `None` for inputs.
    pub fn driven_level(self) -> Option<PinState> {
        self.is_output().then_some(self.latch)
    }
}

fn serialize_pin_state<S: Serializer>(state: &PinState, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(match state {
        PinState::High => "high",
        PinState::Low => "low",
    })
}

/// Register-level access to a bank of digital pins.
///
/// Writes cannot fail: both the AVR port registers and the simulator accept
/// any value. Pins outside the part's range are ignored by implementations.
pub trait GpioPort {
    /// Write the PORT (latch) bit.
    fn write_latch(&mut self, pin: u8, level: PinState);

    /// Write the DDR (direction) bit.
    fn set_direction(&mut self, pin: u8, direction: Direction);

    /// Current DDR and PORT bits.
    fn config(&self, pin: u8) -> PinConfig;

    /// Electrical level on the pin (PIN register).
    fn read(&self, pin: u8) -> PinState;
}
