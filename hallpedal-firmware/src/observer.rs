//! Mapper diagnostics over defmt

use defmt::*;

use hallpedal_core::traits::CalibrationObserver;
use hallpedal_core::Calibration;

/// Logs calibration changes, and at trace level every sample
pub struct DefmtObserver;

impl CalibrationObserver for DefmtObserver {
    fn on_raw_sample(&mut self, raw: u16) {
        trace!("raw={}", raw);
    }

    fn on_calibration_changed(&mut self, calibration: &Calibration) {
        info!(
            "Calibration: raw {}..={}, offset={}, scale={} ({})",
            calibration.min_raw(),
            calibration.max_raw(),
            calibration.offset(),
            calibration.scale(),
            calibration.polarity()
        );
    }

    fn on_output(&mut self, value: u8) {
        trace!("out={}", value);
    }
}
