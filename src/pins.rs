//! Pin assignments for the sampler board.
//!
//! Single source of truth: the motor, radio, pressure and RTC drivers
//! reference the role constants below rather than hard-coding pin numbers.
//!
//! Two board variants exist, each with its own complete table. Exactly one
//! is active per build, selected by the `attiny841` cargo feature (absent →
//! ATmega328P). Pin numbers are Arduino-style digital pin numbers; each
//! table also carries the port/bit each number maps to.
//!
//! Both tables are checked at compile time: a role on an out-of-range or
//! reserved pin, or two roles on one pin, fails the build.

use serde::Serialize;

use crate::error::{PinMapError, Result};

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Functional purpose of a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// XBee radio enable. HIGH = radio powered.
    XbeeEnable,
    /// Motor driver input. HIGH = running.
    Motor,
    /// Pressure sensor supply / select line.
    Pressure,
    /// RTC alarm output (open-drain, active LOW).
    #[serde(rename = "RTC_ALARM_PIN")]
    RtcAlarm,
    /// RTC SPI chip select (active LOW).
    #[serde(rename = "RTC_SS_PIN")]
    RtcSs,
    /// Warning LED.
    #[serde(rename = "WARNLED")]
    WarnLed,
}

impl Role {
    /// Board-schematic name of the role.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XbeeEnable => "XBEE_ENABLE",
            Self::Motor => "MOTOR",
            Self::Pressure => "PRESSURE",
            Self::RtcAlarm => "RTC_ALARM_PIN",
            Self::RtcSs => "RTC_SS_PIN",
            Self::WarnLed => "WARNLED",
        }
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Board hardware variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    /// Reduced pin-count part (ATtiny841, 12 I/O).
    Attiny841,
    /// Standard part (ATmega328P, Arduino Uno pinout).
    Atmega328p,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Attiny841, Variant::Atmega328p];

    /// Parse a part name as printed on the board (`attiny841`, `atmega328p`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name().eq_ignore_ascii_case(name))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Attiny841 => "attiny841",
            Self::Atmega328p => "atmega328p",
        }
    }

    /// The complete pin table for this variant.
    pub const fn pin_map(self) -> &'static PinMap {
        match self {
            Self::Attiny841 => &ATTINY841,
            Self::Atmega328p => &ATMEGA328P,
        }
    }
}

/// I/O port a digital pin lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Port {
    A,
    B,
    D,
}

/// Port and bit behind one digital pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortBit {
    pub port: Port,
    pub bit: u8,
}

const fn pb(port: Port, bit: u8) -> PortBit {
    PortBit { port, bit }
}

// ---------------------------------------------------------------------------
// Pin map
// ---------------------------------------------------------------------------

/// Role → pin table for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinMap {
    pub variant: Variant,
    /// Digital pin `n` is `port_bits[n]`; the length is the pin count.
    pub port_bits: &'static [PortBit],
    pub bindings: &'static [(Role, u8)],
    /// Pins that may never carry a role.
    pub reserved: &'static [u8],
    /// Subset of `reserved` with a fixed hardware function (crystal,
    /// reset). The initializer never touches these.
    pub dedicated: &'static [u8],
}

impl PinMap {
    pub const fn pin_count(&self) -> u8 {
        self.port_bits.len() as u8
    }

    /// Pin bound to `role`, if this variant has one.
    pub const fn pin(&self, role: Role) -> Option<u8> {
        let mut i = 0;
        while i < self.bindings.len() {
            let (r, pin) = self.bindings[i];
            if r as u8 == role as u8 {
                return Some(pin);
            }
            i += 1;
        }
        None
    }

    /// Role bound to `pin`, if any.
    pub const fn role_at(&self, pin: u8) -> Option<Role> {
        let mut i = 0;
        while i < self.bindings.len() {
            let (role, p) = self.bindings[i];
            if p == pin {
                return Some(role);
            }
            i += 1;
        }
        None
    }

    pub const fn is_reserved(&self, pin: u8) -> bool {
        contains(self.reserved, pin)
    }

    pub const fn is_dedicated(&self, pin: u8) -> bool {
        contains(self.dedicated, pin)
    }

    pub const fn port_bit(&self, pin: u8) -> Option<PortBit> {
        if pin < self.pin_count() {
            Some(self.port_bits[pin as usize])
        } else {
            None
        }
    }

    /// `(role, pin)` pairs in table order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, u8)> + '_ {
        self.bindings.iter().copied()
    }

    /// Every pin the boot initializer configures, ascending.
    pub fn managed_pins(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.pin_count()).filter(|&pin| !self.is_dedicated(pin))
    }

    /// Check range, reservation and uniqueness of every binding.
    pub const fn validate(&self) -> Result<()> {
        let mut i = 0;
        while i < self.bindings.len() {
            let (role, pin) = self.bindings[i];
            if pin >= self.pin_count() {
                return Err(PinMapError::OutOfRange { role, pin });
            }
            if self.is_reserved(pin) {
                return Err(PinMapError::Reserved { role, pin });
            }
            let mut j = i + 1;
            while j < self.bindings.len() {
                let (other, other_pin) = self.bindings[j];
                if other as u8 == role as u8 {
                    return Err(PinMapError::RoleRebound { role });
                }
                if other_pin == pin {
                    return Err(PinMapError::Duplicate { first: role, second: other, pin });
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }
}

const fn contains(pins: &[u8], pin: u8) -> bool {
    let mut i = 0;
    while i < pins.len() {
        if pins[i] == pin {
            return true;
        }
        i += 1;
    }
    false
}

// ---------------------------------------------------------------------------
// Variant A: ATtiny841
// ---------------------------------------------------------------------------
//
// Pin 0  PB0 XTAL1
// Pin 1  PB1 XTAL2
// Pin 2  PB2          XBEE_ENABLE
// Pin 3  PA7          MOTOR
// Pin 4  PA6 MOSI
// Pin 5  PA5 MISO
// Pin 6  PA4 SCK
// Pin 7  PA3          PRESSURE
// Pin 8  PA2 RX0      RTC_ALARM_PIN
// Pin 9  PA1 TX0
// Pin 10 PA0          RTC_SS_PIN
// Pin 11 PB3 RESET

pub const ATTINY841: PinMap = PinMap {
    variant: Variant::Attiny841,
    port_bits: &[
        pb(Port::B, 0),
        pb(Port::B, 1),
        pb(Port::B, 2),
        pb(Port::A, 7),
        pb(Port::A, 6),
        pb(Port::A, 5),
        pb(Port::A, 4),
        pb(Port::A, 3),
        pb(Port::A, 2),
        pb(Port::A, 1),
        pb(Port::A, 0),
        pb(Port::B, 3),
    ],
    bindings: &[
        (Role::XbeeEnable, 2),
        (Role::Motor, 3),
        (Role::Pressure, 7),
        (Role::RtcAlarm, 8),
        (Role::RtcSs, 10),
    ],
    reserved: &[0, 1, 4, 5, 6, 11],
    dedicated: &[0, 1, 11],
};

// ---------------------------------------------------------------------------
// Variant B: ATmega328P
// ---------------------------------------------------------------------------
//
// Pin 0  PD0 UART RX, PCINT16
// Pin 1  PD1 UART TX, PCINT17
// Pin 2  PD2 INT0, PCINT18          RTC_ALARM_PIN
// Pin 3  PD3 INT1, OC2B, PWM        MOTOR
// Pin 4  PD4 PCINT20/XCK/T0         WARNLED
// Pin 5  PD5 PCINT21/OC0B/T1, PWM   XBEE_ENABLE
// Pin 6  PD6 PCINT22/OC0A/AIN0, PWM
// Pin 7  PD7 PCINT23/AIN1           PRESSURE
// Pin 8  PB0 PCINT0/CLKO/ICP1       RTC_SS_PIN
// Pin 9  PB1 PCINT1/OC1A, PWM
// Pin 10 PB2 default SS
// Pin 11 PB3 MOSI
// Pin 12 PB4 MISO
// Pin 13 PB5 SCK, LED

pub const ATMEGA328P: PinMap = PinMap {
    variant: Variant::Atmega328p,
    port_bits: &[
        pb(Port::D, 0),
        pb(Port::D, 1),
        pb(Port::D, 2),
        pb(Port::D, 3),
        pb(Port::D, 4),
        pb(Port::D, 5),
        pb(Port::D, 6),
        pb(Port::D, 7),
        pb(Port::B, 0),
        pb(Port::B, 1),
        pb(Port::B, 2),
        pb(Port::B, 3),
        pb(Port::B, 4),
        pb(Port::B, 5),
    ],
    bindings: &[
        (Role::RtcAlarm, 2),
        (Role::Motor, 3),
        (Role::WarnLed, 4),
        (Role::XbeeEnable, 5),
        (Role::Pressure, 7),
        (Role::RtcSs, 8),
    ],
    reserved: &[0, 1, 9, 10, 11, 12, 13],
    dedicated: &[],
};

/// Largest pin count of any variant; sizes simulator and report buffers.
pub const MAX_PINS: usize = 16;

const _: () = {
    assert!(ATTINY841.port_bits.len() <= MAX_PINS);
    assert!(ATMEGA328P.port_bits.len() <= MAX_PINS);
    if let Err(e) = ATTINY841.validate() {
        panic!("{}", e.as_str());
    }
    if let Err(e) = ATMEGA328P.validate() {
        panic!("{}", e.as_str());
    }
};

// ---------------------------------------------------------------------------
// Active build
// ---------------------------------------------------------------------------

#[cfg(feature = "attiny841")]
pub const ACTIVE_VARIANT: Variant = Variant::Attiny841;
#[cfg(not(feature = "attiny841"))]
pub const ACTIVE_VARIANT: Variant = Variant::Atmega328p;

/// Pin table for this build.
pub const ACTIVE: PinMap = *ACTIVE_VARIANT.pin_map();

const fn bound(role: Role) -> u8 {
    match ACTIVE.pin(role) {
        Some(pin) => pin,
        None => panic!("role not bound on this variant"),
    }
}

pub const XBEE_ENABLE: u8 = bound(Role::XbeeEnable);
pub const MOTOR: u8 = bound(Role::Motor);
pub const PRESSURE: u8 = bound(Role::Pressure);
pub const RTC_ALARM_PIN: u8 = bound(Role::RtcAlarm);
pub const RTC_SS_PIN: u8 = bound(Role::RtcSs);
/// Not fitted on the ATtiny841 board; referencing it there fails to build.
#[cfg(not(feature = "attiny841"))]
pub const WARNLED: u8 = bound(Role::WarnLed);
