//! Microchip MCP41xxx / MCP42xxx digital potentiometer
//!
//! 256-position, SPI, write-only. Each write is a 16-bit frame framed by an
//! active-low chip select:
//!
//! ```text
//! command byte: x x C1 C0 x x P1 P0
//!               C1 C0 = 01  write data
//!               P1 P0       potentiometer select (01 = P0, 10 = P1, 11 = both)
//! data byte:    wiper position 0-255
//! ```
//!
//! The single-channel MCP41xxx only has P0.

use hallpedal_core::traits::ActuatorSink;
use hallpedal_hal::{OutputPin, SpiBus};

/// Command bits for "write data"
const CMD_WRITE_DATA: u8 = 0b0001_0000;

/// Which wiper(s) a write affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PotSelect {
    /// Potentiometer 0
    #[default]
    Pot0,
    /// Potentiometer 1 (MCP42xxx only)
    Pot1,
    /// Both potentiometers at once (MCP42xxx only)
    Both,
}

impl PotSelect {
    const fn bits(self) -> u8 {
        match self {
            PotSelect::Pot0 => 0b01,
            PotSelect::Pot1 => 0b10,
            PotSelect::Both => 0b11,
        }
    }
}

/// MCP41xxx/MCP42xxx driver
pub struct Mcp4xxxx<SPI, CS> {
    spi: SPI,
    /// Chip select, active low
    cs: CS,
    select: PotSelect,
    /// Last wiper value successfully written
    last_written: Option<u8>,
    /// Failed writes since construction
    write_errors: u32,
}

impl<SPI: SpiBus, CS: OutputPin> Mcp4xxxx<SPI, CS> {
    /// Create a driver and deselect the chip
    pub fn new(spi: SPI, mut cs: CS, select: PotSelect) -> Self {
        cs.set_high();
        Self {
            spi,
            cs,
            select,
            last_written: None,
            write_errors: 0,
        }
    }

    /// Command byte for a wiper write
    pub const fn command(&self) -> u8 {
        CMD_WRITE_DATA | self.select.bits()
    }

    /// Move the selected wiper(s) to `value`
    ///
    /// Chip select is released even if the transfer fails.
    pub fn set_wiper(&mut self, value: u8) -> Result<(), SPI::Error> {
        let frame = [self.command(), value];

        self.cs.set_low();
        let result = self.spi.write(&frame);
        self.cs.set_high();

        if result.is_ok() {
            self.last_written = Some(value);
        }
        result
    }

    /// Last wiper value successfully written
    pub const fn last_written(&self) -> Option<u8> {
        self.last_written
    }

    /// Number of failed writes so far
    pub const fn write_errors(&self) -> u32 {
        self.write_errors
    }
}

impl<SPI: SpiBus, CS: OutputPin> ActuatorSink for Mcp4xxxx<SPI, CS> {
    fn write(&mut self, value: u8) {
        if self.set_wiper(value).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Select,
        Deselect,
        Byte(u8),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockCs(Log);

    impl OutputPin for MockCs {
        fn set_high(&mut self) {
            self.0.borrow_mut().push(Event::Deselect);
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().push(Event::Select);
        }
    }

    /// SPI that fails once `budget` bytes have been sent
    struct MockSpi {
        log: Log,
        budget: usize,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn transfer_byte(&mut self, byte: u8) -> Result<u8, ()> {
            if self.budget == 0 {
                return Err(());
            }
            self.budget -= 1;
            self.log.borrow_mut().push(Event::Byte(byte));
            Ok(0)
        }
    }

    fn pot(select: PotSelect, budget: usize) -> (Mcp4xxxx<MockSpi, MockCs>, Log) {
        let log = Log::default();
        let spi = MockSpi {
            log: log.clone(),
            budget,
        };
        let pot = Mcp4xxxx::new(spi, MockCs(log.clone()), select);
        (pot, log)
    }

    #[test]
    fn test_command_bytes() {
        assert_eq!(pot(PotSelect::Pot0, 0).0.command(), 0b0001_0001);
        assert_eq!(pot(PotSelect::Pot1, 0).0.command(), 0b0001_0010);
        assert_eq!(pot(PotSelect::Both, 0).0.command(), 0b0001_0011);
    }

    #[test]
    fn test_write_frame() {
        let (mut pot, log) = pot(PotSelect::Pot0, usize::MAX);
        pot.write(200);

        assert_eq!(
            *log.borrow(),
            [
                Event::Deselect,
                Event::Select,
                Event::Byte(0x11),
                Event::Byte(200),
                Event::Deselect,
            ]
        );
        assert_eq!(pot.last_written(), Some(200));
        assert_eq!(pot.write_errors(), 0);
    }

    #[test]
    fn test_failed_write_releases_chip_select() {
        let (mut pot, log) = pot(PotSelect::Both, 1);
        pot.write(42);

        assert_eq!(log.borrow().last(), Some(&Event::Deselect));
        assert_eq!(pot.last_written(), None);
        assert_eq!(pot.write_errors(), 1);

        assert_eq!(pot.set_wiper(43), Err(()));
        assert_eq!(pot.write_errors(), 1);
    }
}
