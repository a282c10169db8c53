//! Digital potentiometer drivers

pub mod mcp4xxxx;

pub use mcp4xxxx::{Mcp4xxxx, PotSelect};
