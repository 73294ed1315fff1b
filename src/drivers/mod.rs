//! GPIO port abstraction and boot-time pin initialization.

pub mod gpio;
pub mod hw_init;
