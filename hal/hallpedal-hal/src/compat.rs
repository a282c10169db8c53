//! Adapter for `embedded-hal` pins
//!
//! Chip HALs such as embassy-rp implement the `embedded-hal` 1.0 digital
//! traits with an `Infallible` error type. [`Compat`] lets those pins be
//! used wherever this crate's infallible GPIO traits are expected.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Wrapper implementing this crate's GPIO traits for an `embedded-hal` pin
pub struct Compat<P>(P);

impl<P> Compat<P> {
    /// Wrap a pin
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Unwrap the pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

fn infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for Compat<P> {
    fn set_high(&mut self) {
        infallible(self.0.set_high());
    }

    fn set_low(&mut self) {
        infallible(self.0.set_low());
    }
}

impl<P: digital::InputPin<Error = Infallible>> InputPin for Compat<P> {
    fn is_high(&mut self) -> bool {
        match self.0.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EhPin {
        high: bool,
    }

    impl digital::ErrorType for EhPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for EhPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl digital::InputPin for EhPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_compat_pin() {
        let mut pin = Compat::new(EhPin { high: false });

        OutputPin::set_high(&mut pin);
        assert!(InputPin::is_high(&mut pin));

        pin.set_state(false);
        assert!(InputPin::is_low(&mut pin));
        assert!(!pin.into_inner().high);
    }
}
