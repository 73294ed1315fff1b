//! AVR port register adapter.
//!
//! Maps Arduino pin numbers to PORTx/DDRx bits via the active pin table and
//! implements [`GpioPort`] on the raw registers.
//!
//! The ATtiny841 has separate pull-up enable registers (PUEx) and ignores
//! PORTx on inputs. The adapter mirrors the latch into PUEx while a pin is an
//! input, so callers see the same latch-enables-pull-up behaviour on both
//! parts.

use embedded_hal::digital::PinState;

use crate::drivers::gpio::{Direction, GpioPort, PinConfig};
use crate::pins::{self, Port, PortBit};

#[cfg(feature = "attiny841")]
pub use avr_device::attiny841::Peripherals;
#[cfg(not(feature = "attiny841"))]
pub use avr_device::atmega328p::Peripherals;

macro_rules! write_bit {
    ($reg:expr, $mask:expr, $set:expr) => {
        $reg.modify(|r, w| {
            let bits = if $set { r.bits() | $mask } else { r.bits() & !$mask };
            // SAFETY: every bit pattern is valid for the port registers.
            unsafe { w.bits(bits) }
        })
    };
}

pub struct AvrPort {
    dp: Peripherals,
}

impl AvrPort {
    pub fn new(dp: Peripherals) -> Self {
        Self { dp }
    }

    fn locate(pin: u8) -> Option<(Port, u8)> {
        pins::ACTIVE
            .port_bit(pin)
            .map(|PortBit { port, bit }| (port, 1u8 << bit))
    }
}

#[cfg(not(feature = "attiny841"))]
impl GpioPort for AvrPort {
    fn write_latch(&mut self, pin: u8, level: PinState) {
        let high = level == PinState::High;
        match Self::locate(pin) {
            Some((Port::B, mask)) => write_bit!(self.dp.PORTB.portb, mask, high),
            Some((Port::D, mask)) => write_bit!(self.dp.PORTD.portd, mask, high),
            _ => {}
        }
    }

    fn set_direction(&mut self, pin: u8, direction: Direction) {
        let output = direction == Direction::Output;
        match Self::locate(pin) {
            Some((Port::B, mask)) => write_bit!(self.dp.PORTB.ddrb, mask, output),
            Some((Port::D, mask)) => write_bit!(self.dp.PORTD.ddrd, mask, output),
            _ => {}
        }
    }

    fn config(&self, pin: u8) -> PinConfig {
        let (ddr, port, mask) = match Self::locate(pin) {
            Some((Port::B, mask)) => (self.dp.PORTB.ddrb.read().bits(), self.dp.PORTB.portb.read().bits(), mask),
            Some((Port::D, mask)) => (self.dp.PORTD.ddrd.read().bits(), self.dp.PORTD.portd.read().bits(), mask),
            _ => return PinConfig::FLOATING,
        };
        decode(ddr, port, mask)
    }

    fn read(&self, pin: u8) -> PinState {
        let (bits, mask) = match Self::locate(pin) {
            Some((Port::B, mask)) => (self.dp.PORTB.pinb.read().bits(), mask),
            Some((Port::D, mask)) => (self.dp.PORTD.pind.read().bits(), mask),
            _ => return PinState::Low,
        };
        PinState::from(bits & mask != 0)
    }
}

#[cfg(feature = "attiny841")]
impl GpioPort for AvrPort {
    fn write_latch(&mut self, pin: u8, level: PinState) {
        let high = level == PinState::High;
        let input = self.config(pin).direction == Direction::Input;
        match Self::locate(pin) {
            Some((Port::A, mask)) => {
                write_bit!(self.dp.PORTA.porta, mask, high);
                write_bit!(self.dp.PORTA.puea, mask, high && input);
            }
            Some((Port::B, mask)) => {
                write_bit!(self.dp.PORTB.portb, mask, high);
                write_bit!(self.dp.PORTB.pueb, mask, high && input);
            }
            _ => {}
        }
    }

    fn set_direction(&mut self, pin: u8, direction: Direction) {
        let output = direction == Direction::Output;
        let latch_high = self.config(pin).latch == PinState::High;
        match Self::locate(pin) {
            Some((Port::A, mask)) => {
                // Pull-up off before driving, on only after releasing.
                if output {
                    write_bit!(self.dp.PORTA.puea, mask, false);
                }
                write_bit!(self.dp.PORTA.ddra, mask, output);
                if !output {
                    write_bit!(self.dp.PORTA.puea, mask, latch_high);
                }
            }
            Some((Port::B, mask)) => {
                if output {
                    write_bit!(self.dp.PORTB.pueb, mask, false);
                }
                write_bit!(self.dp.PORTB.ddrb, mask, output);
                if !output {
                    write_bit!(self.dp.PORTB.pueb, mask, latch_high);
                }
            }
            _ => {}
        }
    }

    fn config(&self, pin: u8) -> PinConfig {
        let (ddr, port, mask) = match Self::locate(pin) {
            Some((Port::A, mask)) => (self.dp.PORTA.ddra.read().bits(), self.dp.PORTA.porta.read().bits(), mask),
            Some((Port::B, mask)) => (self.dp.PORTB.ddrb.read().bits(), self.dp.PORTB.portb.read().bits(), mask),
            _ => return PinConfig::FLOATING,
        };
        decode(ddr, port, mask)
    }

    fn read(&self, pin: u8) -> PinState {
        let (bits, mask) = match Self::locate(pin) {
            Some((Port::A, mask)) => (self.dp.PORTA.pina.read().bits(), mask),
            Some((Port::B, mask)) => (self.dp.PORTB.pinb.read().bits(), mask),
            _ => return PinState::Low,
        };
        PinState::from(bits & mask != 0)
    }
}

fn decode(ddr: u8, port: u8, mask: u8) -> PinConfig {
    PinConfig {
        direction: if ddr & mask != 0 { Direction::Output } else { Direction::Input },
        latch: PinState::from(port & mask != 0),
    }
}
