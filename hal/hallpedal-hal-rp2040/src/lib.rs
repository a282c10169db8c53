//! RP2040-specific HAL for the pedal firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hallpedal-hal` traits on top of embassy-rp:
//!
//! - Blocking single-channel ADC reader
//! - GPIO output constructor returning trait-compatible pins

#![no_std]

pub mod adc;
pub mod gpio;

// Re-export shared traits from hallpedal-hal for convenience
pub use hallpedal_hal::{AdcReader, OutputPin};
