//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware builds these from
//! constants generated out of `pedal.toml` at compile time.

pub mod types;

pub use types::*;
