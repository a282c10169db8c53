//! Board-agnostic core logic for the Hall-effect pedal firmware
//!
//! This crate contains the part of the firmware that does not depend on
//! specific hardware implementations:
//!
//! - Auto-calibrating pedal mapper (raw ADC sample to 8-bit wiper value)
//! - Collaborator traits (sample source, actuator sink)
//! - Calibration observer hook for diagnostics
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod mapper;
pub mod traits;

pub use config::{ConfigError, MapperConfig};
pub use mapper::{Calibration, PedalMapper, Polarity};
