//! Collaborator traits
//!
//! These traits define the interface between the pedal mapper and the
//! hardware-specific code around it: where raw samples come from, where
//! scaled values go, and who gets to watch.

pub mod actuator;
pub mod observer;
pub mod sensor;

pub use actuator::ActuatorSink;
pub use observer::{CalibrationEvent, CalibrationObserver, History, NullObserver};
pub use sensor::{from_fn, FromFn, SampleSource};
