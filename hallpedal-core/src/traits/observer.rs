//! Calibration observer hook
//!
//! An observer sees every raw sample, every calibration change and every
//! computed output of a [`PedalMapper`](crate::PedalMapper). It is purely
//! informational: nothing it does can alter the mapper's state.

use heapless::HistoryBuffer;

use crate::mapper::Calibration;

/// Receiver of mapper diagnostics
///
/// All methods default to no-ops, so an implementation only overrides the
/// notifications it cares about.
pub trait CalibrationObserver {
    /// A raw sample was pulled from the source by `read_scaled_pedal`
    fn on_raw_sample(&mut self, _raw: u16) {}

    /// The calibration bounds or scale changed
    fn on_calibration_changed(&mut self, _calibration: &Calibration) {}

    /// An output value was computed
    fn on_output(&mut self, _value: u8) {}
}

impl<O: CalibrationObserver + ?Sized> CalibrationObserver for &mut O {
    fn on_raw_sample(&mut self, raw: u16) {
        (**self).on_raw_sample(raw)
    }

    fn on_calibration_changed(&mut self, calibration: &Calibration) {
        (**self).on_calibration_changed(calibration)
    }

    fn on_output(&mut self, value: u8) {
        (**self).on_output(value)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CalibrationObserver for NullObserver {}

/// A single recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationEvent {
    /// Raw sample observed
    RawSample(u16),
    /// Calibration changed
    CalibrationChanged(Calibration),
    /// Output computed
    Output(u8),
}

/// Observer that keeps the last `N` events
///
/// Useful for dumping recent mapper activity over a debug channel after
/// something odd happened.
pub struct History<const N: usize> {
    events: HistoryBuffer<CalibrationEvent, N>,
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> History<N> {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            events: HistoryBuffer::new(),
        }
    }

    /// Number of events currently stored
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events were recorded
    pub fn is_empty(&self) -> bool {
        self.events.len() == 0
    }

    /// Most recent event
    pub fn latest(&self) -> Option<&CalibrationEvent> {
        self.events.recent()
    }

    /// Iterate from the oldest retained event to the newest
    pub fn iter(&self) -> impl Iterator<Item = &CalibrationEvent> {
        self.events.oldest_ordered()
    }

    /// Most recent calibration change, if any is still retained
    pub fn latest_calibration(&self) -> Option<Calibration> {
        self.iter()
            .filter_map(|event| match event {
                CalibrationEvent::CalibrationChanged(c) => Some(*c),
                _ => None,
            })
            .last()
    }

    /// Forget all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> CalibrationObserver for History<N> {
    fn on_raw_sample(&mut self, raw: u16) {
        self.events.write(CalibrationEvent::RawSample(raw));
    }

    fn on_calibration_changed(&mut self, calibration: &Calibration) {
        self.events
            .write(CalibrationEvent::CalibrationChanged(*calibration));
    }

    fn on_output(&mut self, value: u8) {
        self.events.write(CalibrationEvent::Output(value));
    }
}
