//! Software SPI

pub mod bitbang;

pub use bitbang::{BitBangSpi, NoMiso};
