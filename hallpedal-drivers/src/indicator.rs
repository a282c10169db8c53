//! Threshold indicator LED
//!
//! Lights an LED while the pedal output is above a threshold. Handy when
//! setting up a new magnet: the LED shows at a glance whether the firmware
//! thinks the pedal is up or down.

use hallpedal_core::traits::ActuatorSink;
use hallpedal_hal::OutputPin;

/// Default threshold (half of the output range)
pub const DEFAULT_THRESHOLD: u8 = 128;

/// LED driven by the mapped pedal value
pub struct IndicatorLed<P> {
    pin: P,
    threshold: u8,
    /// If true, LED on = pin LOW
    active_low: bool,
    /// Current logical state (true = LED lit)
    lit: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    /// Create an indicator, initially dark
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin driving the LED
    /// - `threshold`: values strictly above this light the LED
    /// - `active_low`: if true, the LED is lit when the pin is LOW
    pub fn new(pin: P, threshold: u8, active_low: bool) -> Self {
        let mut led = Self {
            pin,
            threshold,
            active_low,
            lit: false,
        };
        led.set_lit(false);
        led
    }

    /// Switch the LED on or off
    pub fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
        self.pin.set_state(lit != self.active_low);
    }

    /// Check if the LED is currently lit
    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}

impl<P: OutputPin> ActuatorSink for IndicatorLed<P> {
    fn write(&mut self, value: u8) {
        let lit = value > self.threshold;
        if lit != self.lit {
            self.set_lit(lit);
        }
    }
}
