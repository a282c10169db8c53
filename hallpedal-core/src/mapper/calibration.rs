//! Calibration state and the scaling arithmetic
//!
//! All values are integers. The mapping from raw sample to output is
//!
//! ```text
//! output = clamp_low((raw - offset) * 256 / scale, 0)
//! ```
//!
//! where the sign of `scale` encodes the sensor polarity and `offset` sits a
//! little beyond the pressed end of the observed range, so that the region
//! past it reads as exactly 0.

use crate::config::MapperConfig;

/// Direction in which the raw reading moves when the pedal is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Reading falls towards ground as the magnet approaches (positive scale)
    FallsWhenPressed,
    /// Reading rises towards Vcc as the magnet approaches (negative scale)
    RisesWhenPressed,
}

/// Observed sensor range and the derived linear mapping
///
/// Bounds only ever widen. `scale` is never zero once a value exists, since
/// the constructor runs [`Calibration::rescale`] immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Smallest raw value seen since seeding
    min_raw: i32,
    /// Largest raw value seen since seeding
    max_raw: i32,
    /// Raw value that maps to output 0
    offset: i32,
    /// Raw span mapping to the full output range, signed by polarity
    scale: i32,
    /// Middle of the ADC range, used to guess the polarity
    midpoint: i32,
    /// Dead-zone divisor
    dead_zone_divisor: i32,
}

impl Calibration {
    /// Start a calibration from a single reading
    ///
    /// Both bounds are set to `raw`. The resulting scale is the degenerate
    /// ±1 until a second, different reading arrives.
    pub fn seed(config: &MapperConfig, raw: u16) -> Self {
        let mut calibration = Self {
            min_raw: i32::from(raw),
            max_raw: i32::from(raw),
            offset: 0,
            scale: 1,
            midpoint: i32::from(config.adc_midpoint()),
            dead_zone_divisor: i32::from(config.dead_zone_divisor()),
        };
        calibration.rescale();
        calibration
    }

    /// Widen the bounds to include `raw`
    ///
    /// Returns true if the calibration changed. The two bound checks are
    /// independent; each one that fires triggers a rescale.
    pub fn note(&mut self, raw: u16) -> bool {
        let raw = i32::from(raw);
        let mut changed = false;

        if raw < self.min_raw {
            self.min_raw = raw;
            self.rescale();
            changed = true;
        }
        if raw > self.max_raw {
            self.max_raw = raw;
            self.rescale();
            changed = true;
        }

        changed
    }

    /// Recompute offset and scale from the current bounds
    ///
    /// The polarity is guessed from where the middle of the observed range
    /// lies relative to the middle of the ADC range: a Hall sensor at rest
    /// sits near Vcc/2 and swings towards one rail when the magnet approaches.
    pub fn rescale(&mut self) {
        if (self.max_raw + self.min_raw) / 2 < self.midpoint {
            // voltage goes down as the pedal goes down
            self.offset = self.min_raw;
            self.scale = self.max_raw - self.min_raw + 1;
        } else {
            // voltage goes up as the pedal goes down
            self.offset = self.max_raw;
            self.scale = self.min_raw - self.max_raw - 1;
        }

        // Move the zero point past the pressed end and stretch the span by
        // the same amount. `margin` carries the sign of `scale`, so this
        // works for both polarities.
        let margin = self.scale / self.dead_zone_divisor;
        self.offset -= margin;
        self.scale += margin;
    }

    /// Map a raw reading onto 0-255
    ///
    /// Readings on the far side of the offset clip to 0. Readings inside the
    /// observed bounds never exceed 255.
    pub fn scale_down(&self, raw: u16) -> u8 {
        let accumulator = self.accumulate(raw);
        if accumulator < 0 {
            0
        } else {
            u8::try_from(accumulator).unwrap_or(u8::MAX)
        }
    }

    fn accumulate(&self, raw: u16) -> i32 {
        debug_assert!(self.scale != 0);
        (i32::from(raw) - self.offset) * 256 / self.scale
    }

    /// Smallest raw value seen
    pub const fn min_raw(&self) -> i32 {
        self.min_raw
    }

    /// Largest raw value seen
    pub const fn max_raw(&self) -> i32 {
        self.max_raw
    }

    /// Raw value mapping to output 0
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    /// Signed span mapping to the full output range
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Inferred sensor polarity
    pub const fn polarity(&self) -> Polarity {
        if self.scale > 0 {
            Polarity::FallsWhenPressed
        } else {
            Polarity::RisesWhenPressed
        }
    }

    /// Check whether `raw` lies within the observed bounds
    pub fn contains(&self, raw: u16) -> bool {
        (self.min_raw..=self.max_raw).contains(&i32::from(raw))
    }
}
