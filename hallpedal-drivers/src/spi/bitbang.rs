//! Bit-banged SPI master
//!
//! Drives three GPIOs to emulate an SPI master, MSB first. Slow, but it
//! leaves the hardware SPI blocks free and works on any pins.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use hallpedal_hal::spi::{Mode, Phase, Polarity};
use hallpedal_hal::{InputPin, OutputPin, SpiBus};

/// Placeholder MISO for write-only devices; always reads low
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMiso;

impl InputPin for NoMiso {
    fn is_high(&mut self) -> bool {
        false
    }
}

/// Software SPI master
///
/// `half_period_ns` is spent after every clock edge, so the bus runs at
/// roughly `1 / (2 * half_period_ns)`.
pub struct BitBangSpi<MOSI, MISO, SCK, D> {
    mosi: MOSI,
    miso: MISO,
    sck: SCK,
    delay: D,
    mode: Mode,
    half_period_ns: u32,
}

impl<MOSI, MISO, SCK, D> BitBangSpi<MOSI, MISO, SCK, D>
where
    MOSI: OutputPin,
    MISO: InputPin,
    SCK: OutputPin,
    D: DelayNs,
{
    /// Create a bus and park the clock at its idle level
    pub fn new(mosi: MOSI, miso: MISO, mut sck: SCK, delay: D, mode: Mode) -> Self {
        let (polarity, _): (Polarity, Phase) = mode.into();
        sck.set_state(polarity == Polarity::IdleHigh);
        Self {
            mosi,
            miso,
            sck,
            delay,
            mode,
            half_period_ns: 0,
        }
    }

    /// Set the time spent after each clock edge
    pub fn with_half_period_ns(mut self, half_period_ns: u32) -> Self {
        self.half_period_ns = half_period_ns;
        self
    }

    /// SPI mode in use
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    fn clock(&mut self, high: bool) {
        self.sck.set_state(high);
        if self.half_period_ns > 0 {
            self.delay.delay_ns(self.half_period_ns);
        }
    }
}

impl<MOSI, MISO, SCK, D> SpiBus for BitBangSpi<MOSI, MISO, SCK, D>
where
    MOSI: OutputPin,
    MISO: InputPin,
    SCK: OutputPin,
    D: DelayNs,
{
    type Error = Infallible;

    fn transfer_byte(&mut self, byte: u8) -> Result<u8, Infallible> {
        let (polarity, phase): (Polarity, Phase) = self.mode.into();
        let idle = polarity == Polarity::IdleHigh;
        let mut received = 0u8;

        for bit in (0..8).rev() {
            let out = byte & (1 << bit) != 0;
            match phase {
                Phase::CaptureOnFirstTransition => {
                    self.mosi.set_state(out);
                    self.clock(!idle);
                    received = (received << 1) | u8::from(self.miso.is_high());
                    self.clock(idle);
                }
                Phase::CaptureOnSecondTransition => {
                    self.clock(!idle);
                    self.mosi.set_state(out);
                    self.clock(idle);
                    received = (received << 1) | u8::from(self.miso.is_high());
                }
            }
        }

        Ok(received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared wire state seen by all mock pins
    #[derive(Default)]
    struct Wire {
        mosi: bool,
        sck: bool,
        /// (new clock level, MOSI at that moment) for every clock edge
        edges: Vec<(bool, bool)>,
        /// Bits the slave will put on MISO, consumed per read
        miso_bits: Vec<bool>,
    }

    #[derive(Clone)]
    struct Mosi(Rc<RefCell<Wire>>);
    #[derive(Clone)]
    struct Sck(Rc<RefCell<Wire>>);
    #[derive(Clone)]
    struct Miso(Rc<RefCell<Wire>>);

    impl OutputPin for Mosi {
        fn set_high(&mut self) {
            self.0.borrow_mut().mosi = true;
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().mosi = false;
        }
    }

    impl Sck {
        fn set(&mut self, level: bool) {
            let mut wire = self.0.borrow_mut();
            if wire.sck != level {
                let mosi = wire.mosi;
                wire.edges.push((level, mosi));
            }
            wire.sck = level;
        }
    }

    impl OutputPin for Sck {
        fn set_high(&mut self) {
            self.set(true);
        }
        fn set_low(&mut self) {
            self.set(false);
        }
    }

    impl InputPin for Miso {
        fn is_high(&mut self) -> bool {
            let mut wire = self.0.borrow_mut();
            if wire.miso_bits.is_empty() {
                false
            } else {
                wire.miso_bits.remove(0)
            }
        }
    }

    struct CountingDelay(u32);

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.0 += 1;
        }
    }

    fn bus(
        wire: &Rc<RefCell<Wire>>,
        mode: Mode,
    ) -> BitBangSpi<Mosi, Miso, Sck, CountingDelay> {
        BitBangSpi::new(
            Mosi(wire.clone()),
            Miso(wire.clone()),
            Sck(wire.clone()),
            CountingDelay(0),
            mode,
        )
    }

    /// Reassemble the byte the slave latched on its capture edges
    fn latched(wire: &Wire, mode: Mode) -> u8 {
        let (polarity, phase): (Polarity, Phase) = mode.into();
        let idle = polarity == Polarity::IdleHigh;
        let capture_level = match phase {
            Phase::CaptureOnFirstTransition => !idle,
            Phase::CaptureOnSecondTransition => idle,
        };
        wire.edges
            .iter()
            .filter(|(level, _)| *level == capture_level)
            .fold(0u8, |acc, &(_, bit)| (acc << 1) | u8::from(bit))
    }

    #[test]
    fn test_clock_parks_at_idle_level() {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let _ = bus(&wire, Mode::Mode2);
        assert!(wire.borrow().sck);

        let wire = Rc::new(RefCell::new(Wire {
            sck: true,
            ..Default::default()
        }));
        let _ = bus(&wire, Mode::Mode0);
        assert!(!wire.borrow().sck);
    }

    #[test]
    fn test_all_modes_shift_msb_first() {
        for mode in [Mode::Mode0, Mode::Mode1, Mode::Mode2, Mode::Mode3] {
            let wire = Rc::new(RefCell::new(Wire::default()));
            let mut spi = bus(&wire, mode);
            wire.borrow_mut().edges.clear();

            spi.transfer_byte(0b1011_0010).unwrap();

            let wire = wire.borrow();
            assert_eq!(wire.edges.len(), 16, "{:?}", mode);
            assert_eq!(latched(&wire, mode), 0b1011_0010, "{:?}", mode);
        }
    }

    #[test]
    fn test_receives_miso_bits() {
        let wire = Rc::new(RefCell::new(Wire::default()));
        wire.borrow_mut().miso_bits = [true, false, false, true, true, true, false, true].to_vec();
        let mut spi = bus(&wire, Mode::Mode0);

        assert_eq!(spi.transfer_byte(0x00).unwrap(), 0b1001_1101);
    }

    #[test]
    fn test_write_sends_bytes_in_order() {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let mut spi = bus(&wire, Mode::Mode0);

        spi.write(&[0x11, 0xA5]).unwrap();

        let wire = wire.borrow();
        let rising: Vec<bool> = wire
            .edges
            .iter()
            .filter(|(level, _)| *level)
            .map(|&(_, bit)| bit)
            .collect();
        let first = rising[..8].iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b));
        let second = rising[8..].iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b));
        assert_eq!((first, second), (0x11, 0xA5));
    }

    #[test]
    fn test_half_period_delay() {
        let wire = Rc::new(RefCell::new(Wire::default()));

        let mut fast = bus(&wire, Mode::Mode0);
        fast.transfer_byte(0xFF).unwrap();
        assert_eq!(fast.delay.0, 0);

        let mut slow = bus(&wire, Mode::Mode0).with_half_period_ns(500);
        slow.transfer_byte(0xFF).unwrap();
        assert_eq!(slow.delay.0, 16);
    }
}
