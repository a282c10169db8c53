//! GPIO constructors
//!
//! embassy-rp pins wrapped so that they implement the `hallpedal-hal`
//! traits expected by the drivers.

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;

use hallpedal_hal::Compat;

/// Push-pull output usable by the drivers
pub type HalOutput<'d> = Compat<Output<'d>>;

/// Configure a pin as output with the given initial level
pub fn output<'d>(pin: Peri<'d, impl Pin>, high: bool) -> HalOutput<'d> {
    let level = if high { Level::High } else { Level::Low };
    Compat::new(Output::new(pin, level))
}
