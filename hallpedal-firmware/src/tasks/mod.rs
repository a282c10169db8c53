//! Embassy async tasks

pub mod pedal;

pub use pedal::pedal_task;
