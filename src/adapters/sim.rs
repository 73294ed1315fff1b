//! Host simulation of an AVR GPIO port.
//!
//! Keeps a DDR/PORT pair per pin, starts in the reset state (all inputs,
//! latches low) and remembers every level a pin has actively driven, so
//! tests can check that a switch never passed through the wrong level.

use embedded_hal::digital::PinState;

use crate::drivers::gpio::{Direction, GpioPort, PinConfig};
use crate::pins::MAX_PINS;

#[derive(Debug, Clone)]
pub struct SimPort {
    pin_count: u8,
    configs: [PinConfig; MAX_PINS],
    /// Level seen on a floating input (external circuitry).
    external: [PinState; MAX_PINS],
    driven_high: u16,
    driven_low: u16,
    writes: [u16; MAX_PINS],
}

impl SimPort {
    pub fn new(pin_count: u8) -> Self {
        Self {
            pin_count: pin_count.min(MAX_PINS as u8),
            configs: [PinConfig::FLOATING; MAX_PINS],
            external: [PinState::Low; MAX_PINS],
            driven_high: 0,
            driven_low: 0,
            writes: [0; MAX_PINS],
        }
    }

    /// Force a pin's registers without recording a drive (test setup).
    pub fn preset(&mut self, pin: u8, config: PinConfig) {
        if self.in_range(pin) {
            self.configs[pin as usize] = config;
        }
    }

    pub fn set_external(&mut self, pin: u8, level: PinState) {
        if self.in_range(pin) {
            self.external[pin as usize] = level;
        }
    }

    /// Whether `pin` has driven `level` since construction or the last
    /// [`clear_trace`](Self::clear_trace).
    pub fn was_driven(&self, pin: u8, level: PinState) -> bool {
        let mask = bit(pin);
        match level {
            PinState::High => self.driven_high & mask != 0,
            PinState::Low => self.driven_low & mask != 0,
        }
    }

    /// Register writes issued to `pin`.
    pub fn writes(&self, pin: u8) -> u16 {
        if self.in_range(pin) { self.writes[pin as usize] } else { 0 }
    }

    pub fn clear_trace(&mut self) {
        self.driven_high = 0;
        self.driven_low = 0;
        self.writes = [0; MAX_PINS];
    }

    fn in_range(&self, pin: u8) -> bool {
        pin < self.pin_count
    }

    fn record(&mut self, pin: u8) {
        let idx = pin as usize;
        self.writes[idx] = self.writes[idx].saturating_add(1);
        match self.configs[idx].driven_level() {
            Some(PinState::High) => self.driven_high |= bit(pin),
            Some(PinState::Low) => self.driven_low |= bit(pin),
            None => {}
        }
    }
}

fn bit(pin: u8) -> u16 {
    1u16.checked_shl(u32::from(pin)).unwrap_or(0)
}

impl GpioPort for SimPort {
    fn write_latch(&mut self, pin: u8, level: PinState) {
        if !self.in_range(pin) {
            return;
        }
        self.configs[pin as usize].latch = level;
        self.record(pin);
    }

    fn set_direction(&mut self, pin: u8, direction: Direction) {
        if !self.in_range(pin) {
            return;
        }
        self.configs[pin as usize].direction = direction;
        self.record(pin);
    }

    fn config(&self, pin: u8) -> PinConfig {
        if self.in_range(pin) { self.configs[pin as usize] } else { PinConfig::FLOATING }
    }

    fn read(&self, pin: u8) -> PinState {
        let config = self.config(pin);
        match config.driven_level() {
            Some(level) => level,
            None if config.pull_up() => PinState::High,
            None if self.in_range(pin) => self.external[pin as usize],
            None => PinState::Low,
        }
    }
}
