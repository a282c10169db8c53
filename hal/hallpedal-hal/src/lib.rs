//! Hallpedal Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. Drivers in `hallpedal-drivers` are written
//! against these traits only, so they can be exercised on the host with
//! mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hallpedal-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hallpedal-drivers                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hallpedal-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hallpedal-hal-rp2040                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`adc::AdcReader`] - Single-channel ADC conversions

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod compat;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use adc::AdcReader;
pub use compat::Compat;
pub use gpio::{InputPin, OutputPin};
pub use spi::SpiBus;
