//! Pin state report.
//!
//! Snapshot of every pin of a variant: its role, whether it is reserved, and
//! the DDR/PORT bits read back from the port. Serialises to JSON for the host
//! simulator and for bring-up logs.

use embedded_hal::digital::PinState;
use heapless::Vec;
use serde::Serialize;

use crate::drivers::gpio::{GpioPort, PinConfig};
use crate::drivers::hw_init;
use crate::pins::{MAX_PINS, PinMap, PortBit, Role, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinReport {
    pub pin: u8,
    pub port_bit: PortBit,
    pub role: Option<Role>,
    pub reserved: bool,
    pub dedicated: bool,
    pub config: PinConfig,
    pub reads_high: bool,
    pub in_boot_state: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    pub variant: Variant,
    pub pins: Vec<PinReport, MAX_PINS>,
}

impl BoardReport {
    /// Pins that should have been initialized but are not in boot state.
    pub fn misconfigured(&self) -> impl Iterator<Item = &PinReport> {
        self.pins.iter().filter(|p| !p.dedicated && !p.in_boot_state)
    }
}

pub fn pin_report<P: GpioPort>(port: &P, map: &PinMap) -> BoardReport {
    let mut pins = Vec::new();
    for (pin, &port_bit) in (0u8..).zip(map.port_bits) {
        let report = PinReport {
            pin,
            port_bit,
            role: map.role_at(pin),
            reserved: map.is_reserved(pin),
            dedicated: map.is_dedicated(pin),
            config: port.config(pin),
            reads_high: port.read(pin) == PinState::High,
            in_boot_state: hw_init::in_boot_state(port, map, pin),
        };
        if pins.push(report).is_err() {
            break;
        }
    }
    BoardReport { variant: map.variant, pins }
}
