//! Ratiometric Hall-effect sensor
//!
//! Sensors such as the Allegro A1302 output Vcc/2 with no field and swing
//! towards one rail or the other depending on which pole of the magnet
//! approaches. The pedal mapper works out which one it is; this driver only
//! turns ADC conversions into an uninterrupted stream of raw samples.

use hallpedal_core::traits::SampleSource;
use hallpedal_hal::AdcReader;

/// Hall sensor read through an ADC channel
///
/// A failed conversion repeats the last good reading (the ADC midpoint
/// before the first success) and is counted in [`HallSensor::read_errors`].
pub struct HallSensor<ADC> {
    adc: ADC,
    /// Largest legal reading for the ADC's resolution
    adc_max: u16,
    /// Last good reading
    last: u16,
    /// Failed conversions since construction
    read_errors: u32,
}

impl<ADC: AdcReader> HallSensor<ADC> {
    /// Create a sensor on an ADC channel
    pub fn new(adc: ADC) -> Self {
        let adc_max = u16::MAX >> (16 - ADC::BITS.min(16));
        Self {
            adc,
            adc_max,
            last: adc_max / 2 + 1,
            read_errors: 0,
        }
    }

    /// ADC resolution in bits
    pub const fn bits(&self) -> u8 {
        ADC::BITS
    }

    /// Number of failed conversions so far
    pub const fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Last good reading
    pub const fn last(&self) -> u16 {
        self.last
    }
}

impl<ADC: AdcReader> SampleSource for HallSensor<ADC> {
    fn sample(&mut self) -> u16 {
        match self.adc.read() {
            Ok(raw) => {
                // some converters report a few counts of overshoot
                self.last = raw.min(self.adc_max);
            }
            Err(_) => {
                self.read_errors = self.read_errors.saturating_add(1);
            }
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted 10-bit ADC; `None` entries fail
    struct ScriptedAdc {
        script: &'static [Option<u16>],
        pos: usize,
    }

    impl AdcReader for ScriptedAdc {
        type Error = ();

        const BITS: u8 = 10;

        fn read(&mut self) -> Result<u16, ()> {
            let next = self.script[self.pos % self.script.len()];
            self.pos += 1;
            next.ok_or(())
        }
    }

    fn sensor(script: &'static [Option<u16>]) -> HallSensor<ScriptedAdc> {
        HallSensor::new(ScriptedAdc { script, pos: 0 })
    }

    #[test]
    fn test_passes_readings_through() {
        let mut hall = sensor(&[Some(508), Some(463)]);
        assert_eq!(hall.bits(), 10);
        assert_eq!(hall.sample(), 508);
        assert_eq!(hall.sample(), 463);
        assert_eq!(hall.read_errors(), 0);
    }

    #[test]
    fn test_failed_read_repeats_last_value() {
        let mut hall = sensor(&[Some(508), None, None, Some(470)]);
        assert_eq!(hall.sample(), 508);
        assert_eq!(hall.sample(), 508);
        assert_eq!(hall.sample(), 508);
        assert_eq!(hall.read_errors(), 2);
        assert_eq!(hall.sample(), 470);
        assert_eq!(hall.last(), 470);
    }

    #[test]
    fn test_failure_before_first_reading_returns_midpoint() {
        let mut hall = sensor(&[None]);
        assert_eq!(hall.sample(), 512);
        assert_eq!(hall.read_errors(), 1);
    }

    #[test]
    fn test_clamps_to_resolution() {
        let mut hall = sensor(&[Some(1023), Some(1030)]);
        assert_eq!(hall.sample(), 1023);
        assert_eq!(hall.sample(), 1023);
    }
}
