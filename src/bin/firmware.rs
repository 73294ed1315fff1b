//! Sampler board firmware entry.
//!
//! Puts every pin into its boot state before anything else runs. Interrupts
//! are still disabled from reset at this point; the drivers that own the
//! individual roles take over afterwards.

#![no_std]
#![no_main]

use panic_halt as _;

use samplerboard::adapters::avr::{AvrPort, Peripherals};
use samplerboard::drivers::hw_init;

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();
    let mut port = AvrPort::new(dp);
    hw_init::init_peripherals(&mut port);

    loop {
        avr_device::asm::sleep();
    }
}
