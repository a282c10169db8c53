//! Sensor drivers

pub mod hall;

pub use hall::HallSensor;
