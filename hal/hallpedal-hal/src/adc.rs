//! ADC abstractions

/// Single-channel ADC
///
/// The channel is selected when the reader is constructed; each call to
/// [`AdcReader::read`] performs one blocking conversion.
pub trait AdcReader {
    /// Error type for conversions
    type Error;

    /// Resolution of the returned value in bits
    const BITS: u8;

    /// Perform one conversion and return the right-aligned result
    fn read(&mut self) -> Result<u16, Self::Error>;
}
