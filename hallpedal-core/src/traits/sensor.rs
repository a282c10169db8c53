//! Raw sample source trait

/// Source of raw, unsigned sensor readings
///
/// Each call returns a fresh reading. Implementations must always produce a
/// value; hardware faults are handled inside the implementation (for
/// example by repeating the last good reading).
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait SampleSource {
    /// Take one reading
    fn sample(&mut self) -> u16;
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn sample(&mut self) -> u16 {
        (**self).sample()
    }
}

/// Sample source backed by a closure
///
/// Created with [`from_fn`].
pub struct FromFn<F>(F);

/// Turn a closure into a [`SampleSource`]
///
/// # Example
/// ```
/// use hallpedal_core::traits::{from_fn, SampleSource};
/// let mut source = from_fn(|| 508);
/// assert_eq!(source.sample(), 508);
/// ```
pub fn from_fn<F: FnMut() -> u16>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> u16> SampleSource for FromFn<F> {
    fn sample(&mut self) -> u16 {
        (self.0)()
    }
}
