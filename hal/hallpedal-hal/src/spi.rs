//! SPI bus abstractions
//!
//! Provides traits for SPI master operations that can be implemented
//! by chip-specific HALs or in software.

/// SPI bus master
///
/// Implementors provide a single full-duplex byte exchange; the buffer
/// operations are built on top of it.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Send one byte while receiving one
    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Write data, discarding whatever is received
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.transfer_byte(byte)?;
        }
        Ok(())
    }

    /// Transfer data in place
    ///
    /// Writes data from buffer while reading into the same buffer.
    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        for byte in data.iter_mut() {
            *byte = self.transfer_byte(*byte)?;
        }
        Ok(())
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    #[default]
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loopback bus that echoes each byte inverted
    struct Inverter {
        sent: [u8; 4],
        count: usize,
    }

    impl SpiBus for Inverter {
        type Error = ();

        fn transfer_byte(&mut self, byte: u8) -> Result<u8, ()> {
            if self.count == self.sent.len() {
                return Err(());
            }
            self.sent[self.count] = byte;
            self.count += 1;
            Ok(!byte)
        }
    }

    #[test]
    fn test_write_and_transfer() {
        let mut bus = Inverter {
            sent: [0; 4],
            count: 0,
        };

        bus.write(&[0x11, 0x80]).unwrap();
        let mut buf = [0x0F, 0xF0];
        bus.transfer_in_place(&mut buf).unwrap();

        assert_eq!(bus.sent, [0x11, 0x80, 0x0F, 0xF0]);
        assert_eq!(buf, [0xF0, 0x0F]);

        // error aborts the transfer
        assert_eq!(bus.write(&[1]), Err(()));
    }

    #[test]
    fn test_mode_decomposition() {
        let (cpol, cpha): (Polarity, Phase) = Mode::Mode3.into();
        assert_eq!(cpol, Polarity::IdleHigh);
        assert_eq!(cpha, Phase::CaptureOnSecondTransition);
        assert_eq!(Mode::default(), Mode::Mode0);
    }
}
