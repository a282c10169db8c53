//! Auto-calibrating pedal mapper
//!
//! Converts raw Hall sensor readings of unknown polarity and unknown range
//! into 8-bit potentiometer values. The most extreme reading ever seen in
//! each direction maps to the corresponding end of the output range, so the
//! pedal calibrates itself simply by being pressed once.

pub mod calibration;

pub use calibration::{Calibration, Polarity};

use crate::config::MapperConfig;
use crate::traits::{CalibrationObserver, NullObserver, SampleSource};

/// Pedal position mapper
///
/// Owns the calibration state exclusively. `O` receives diagnostics and
/// defaults to [`NullObserver`].
pub struct PedalMapper<O = NullObserver> {
    config: MapperConfig,
    calibration: Option<Calibration>,
    observer: O,
}

impl PedalMapper {
    /// Create an uncalibrated mapper without an observer
    pub const fn new(config: MapperConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<O> PedalMapper<O> {
    /// Create an uncalibrated mapper reporting to `observer`
    pub const fn with_observer(config: MapperConfig, observer: O) -> Self {
        Self {
            config,
            calibration: None,
            observer,
        }
    }

    /// Mapper configuration
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Current calibration, if one has been established
    pub const fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    /// Check if a calibration has been established
    pub const fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// Borrow the observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<O: CalibrationObserver> PedalMapper<O> {
    /// Establish a fresh calibration from the sample source
    ///
    /// Discards `warmup_count` readings to let the sensor settle, seeds both
    /// bounds from the next reading, then feeds `warmup_count` more readings
    /// through the regular bound update. Any previous calibration is
    /// replaced.
    ///
    /// If every reading is identical the scale ends up as ±1; the mapper
    /// keeps working and widens as soon as the pedal moves.
    pub fn initialize_calibration<S: SampleSource + ?Sized>(&mut self, source: &mut S) {
        let warmup = self.config.warmup_count();

        for _ in 0..warmup {
            source.sample();
        }

        let mut calibration = Calibration::seed(&self.config, source.sample());
        for _ in 0..warmup {
            calibration.note(source.sample());
        }
        calibration.rescale();

        self.calibration = Some(calibration);
        self.observer.on_calibration_changed(&calibration);
    }

    /// Read one sample and map it onto 0-255
    ///
    /// The bounds are widened before the value is scaled, so a reading past
    /// the known range becomes the new extreme and maps to 0 or close to
    /// 255 instead of overflowing.
    ///
    /// Calling this on an uncalibrated mapper seeds the calibration from the
    /// sample just read.
    pub fn read_scaled_pedal<S: SampleSource + ?Sized>(&mut self, source: &mut S) -> u8 {
        let raw = source.sample();
        self.observer.on_raw_sample(raw);

        let (mut calibration, mut changed) = match self.calibration {
            Some(calibration) => (calibration, false),
            None => (Calibration::seed(&self.config, raw), true),
        };
        changed |= calibration.note(raw);
        self.calibration = Some(calibration);

        if changed {
            self.observer.on_calibration_changed(&calibration);
        }

        let value = calibration.scale_down(raw);
        self.observer.on_output(value);
        value
    }
}
