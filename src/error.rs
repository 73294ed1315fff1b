//! Error types for the sampler board support code.
//!
//! The boot initializer has no runtime failure path, so the only errors here
//! describe an inconsistent pin map. They are raised during `const`
//! evaluation of the built-in tables (failing the build) and by tests.
//! All variants are `Copy` and carry the offending role and pin, which
//! `Display` names. A build failure from the `const` check reports only the
//! error kind (`as_str`), since `const` panics cannot format values.

use core::fmt;

use crate::pins::Role;

// ---------------------------------------------------------------------------
// Pin map errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMapError {
    /// Role bound to a pin number the part does not have.
    OutOfRange { role: Role, pin: u8 },
    /// Role bound to a pin reserved for crystal, reset, UART, PWM or SPI.
    Reserved { role: Role, pin: u8 },
    /// Two roles bound to the same pin.
    Duplicate { first: Role, second: Role, pin: u8 },
    /// One role bound more than once.
    RoleRebound { role: Role },
}

impl PinMapError {
    /// Static description, usable from `const` context where `Display`
    /// formatting is unavailable.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "pin map: role bound to out-of-range pin",
            Self::Reserved { .. } => "pin map: role bound to reserved pin",
            Self::Duplicate { .. } => "pin map: two roles share one pin",
            Self::RoleRebound { .. } => "pin map: role bound more than once",
        }
    }
}

impl fmt::Display for PinMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { role, pin } => write!(f, "{} on pin {pin}: out of range", role.name()),
            Self::Reserved { role, pin } => write!(f, "{} on pin {pin}: pin is reserved", role.name()),
            Self::Duplicate { first, second, pin } => {
                write!(f, "{} and {} both on pin {pin}", first.name(), second.name())
            }
            Self::RoleRebound { role } => write!(f, "{} bound more than once", role.name()),
        }
    }
}

/// Result alias for pin map checks.
pub type Result<T> = core::result::Result<T, PinMapError>;
