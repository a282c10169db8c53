//! Hardware driver implementations
//!
//! This crate provides the concrete collaborators of the pedal mapper,
//! written against the `hallpedal-hal` traits:
//!
//! - Hall-effect sensor sample source (ADC)
//! - Bit-banged SPI master
//! - MCP41xxx/MCP42xxx digital potentiometer
//! - Threshold indicator LED

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod digipot;
pub mod indicator;
pub mod sensor;
pub mod spi;
