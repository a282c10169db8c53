//! ADC channel reader
//!
//! RP2040 has a single 12-bit SAR ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! The ADC clock is fixed at 48 MHz, so unlike smaller parts there is no
//! prescaler to pick here.

use embassy_rp::adc::{Adc, AdcPin, Blocking, Channel, Config, Error};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::ADC;
use embassy_rp::Peri;

use hallpedal_hal::AdcReader;

/// One ADC channel with the converter it is read through
pub struct RpAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> RpAdc<'d> {
    /// Take the ADC and bind it to a GPIO input
    ///
    /// The pin is left floating; a Hall sensor drives it actively.
    pub fn new(adc: Peri<'d, ADC>, pin: Peri<'d, impl AdcPin + 'd>) -> Self {
        Self {
            adc: Adc::new_blocking(adc, Config::default()),
            channel: Channel::new_pin(pin, Pull::None),
        }
    }
}

impl AdcReader for RpAdc<'_> {
    type Error = Error;

    const BITS: u8 = 12;

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}
