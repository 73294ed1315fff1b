//! One-shot pin initialization.
//!
//! Puts every pin the board owns into a known safe state. Called once from
//! the startup path before interrupts are enabled and before any driver
//! touches its pin. Running it again yields the same final state.

use log::{debug, info};

use crate::drivers::gpio::{Direction, GpioPort, PinConfig};
use crate::pins::{self, PinMap, Role};

/// Boot state for a pin bound to `role` (`None` = unused pin).
pub const fn boot_state(role: Option<Role>) -> PinConfig {
    match role {
        // Radio stays unpowered until the radio driver decides otherwise.
        Some(Role::XbeeEnable) => PinConfig::OUTPUT_LOW,
        Some(Role::Pressure) => PinConfig::OUTPUT_HIGH,
        // Chip select is active LOW: keep the RTC deselected.
        Some(Role::RtcSs) => PinConfig::OUTPUT_HIGH,
        Some(Role::Motor) => PinConfig::OUTPUT_LOW,
        Some(Role::WarnLed) => PinConfig::OUTPUT_LOW,
        // Open-drain alarm line needs the pull-up.
        Some(Role::RtcAlarm) | None => PinConfig::INPUT_PULL_UP,
    }
}

/// Boot entry point for the active board variant.
pub fn init_peripherals<P: GpioPort>(port: &mut P) {
    info!("hw_init: configuring pins for {:?}", pins::ACTIVE_VARIANT);
    init_pins(port, &pins::ACTIVE);
    info!("hw_init: all pins configured");
}

/// Configure every managed pin of `map` to its boot state.
pub fn init_pins<P: GpioPort>(port: &mut P, map: &PinMap) {
    for pin in map.managed_pins() {
        let role = map.role_at(pin);
        let target = boot_state(role);
        configure(port, pin, target);
        debug!(
            "hw_init: pin {} ({}) -> {:?}/{:?}",
            pin,
            role.map_or("unused", Role::name),
            target.direction,
            target.latch,
        );
    }
}

/// Apply `target` without passing through an unintended driven level.
///
/// Outputs: latch first, then DDR, so the pin switches straight to its final
/// level. Inputs: DDR first, then latch, so a pin that was driving LOW is
/// released before the pull-up comes on rather than briefly driving HIGH.
fn configure<P: GpioPort>(port: &mut P, pin: u8, target: PinConfig) {
    match target.direction {
        Direction::Output => {
            port.write_latch(pin, target.latch);
            port.set_direction(pin, Direction::Output);
        }
        Direction::Input => {
            port.set_direction(pin, Direction::Input);
            port.write_latch(pin, target.latch);
        }
    }
}

/// True when `pin` already sits in its boot state.
pub fn in_boot_state<P: GpioPort>(port: &P, map: &PinMap, pin: u8) -> bool {
    port.config(pin) == boot_state(map.role_at(pin))
}
