//! Actuator sink trait

/// Consumer of mapped output values
///
/// Typically a digital potentiometer. Writes are fire-and-forget: there is
/// no acknowledgment and no error path back to the mapper.
pub trait ActuatorSink {
    /// Transmit a value (0-255) to the downstream device
    fn write(&mut self, value: u8);
}

impl<A: ActuatorSink + ?Sized> ActuatorSink for &mut A {
    fn write(&mut self, value: u8) {
        (**self).write(value)
    }
}

/// A missing sink ignores every value
impl<A: ActuatorSink> ActuatorSink for Option<A> {
    fn write(&mut self, value: u8) {
        if let Some(sink) = self {
            sink.write(value);
        }
    }
}

/// Both sinks receive every value, first `A` then `B`
impl<A: ActuatorSink, B: ActuatorSink> ActuatorSink for (A, B) {
    fn write(&mut self, value: u8) {
        self.0.write(value);
        self.1.write(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        values: Vec<u8>,
    }

    impl ActuatorSink for Recorder {
        fn write(&mut self, value: u8) {
            self.values.push(value);
        }
    }

    #[test]
    fn test_pair_sink_forwards_to_both() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        {
            let mut sink = (&mut first, &mut second);
            sink.write(7);
            sink.write(255);
        }
        assert_eq!(first.values, [7, 255]);
        assert_eq!(second.values, [7, 255]);
    }

    #[test]
    fn test_optional_sink() {
        let mut absent: Option<Recorder> = None;
        absent.write(1);

        let mut present = Some(Recorder::default());
        present.write(2);
        assert_eq!(present.map(|r| r.values), Some(vec![2]));
    }
}
