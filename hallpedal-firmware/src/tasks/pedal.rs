//! Pedal polling task
//!
//! Calibrates once at startup, then on every tick reads the sensor, maps the
//! reading and writes it to the potentiometer and indicator.

use defmt::*;
use embassy_time::{Duration, Ticker};

use hallpedal_core::traits::ActuatorSink;
use hallpedal_core::{MapperConfig, PedalMapper};

use crate::boards::{Indicator, Pot, Sensor};
use crate::config::{POLL_INTERVAL_MS, REPORT_EVERY};
use crate::observer::DefmtObserver;

#[embassy_executor::task]
pub async fn pedal_task(
    mut sensor: Sensor,
    pot: Pot,
    indicator: Option<Indicator>,
    config: MapperConfig,
) {
    info!("Pedal task started");

    if sensor.bits() != config.adc_bits() {
        warn!(
            "ADC is {}-bit but mapper expects {}-bit; polarity detection will be off",
            sensor.bits(),
            config.adc_bits()
        );
    }

    let mut mapper = PedalMapper::with_observer(config, DefmtObserver);
    mapper.initialize_calibration(&mut sensor);
    info!("Initial calibration done, release and press the pedal once");

    let mut outputs = (pot, indicator);
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut polls: u32 = 0;

    loop {
        ticker.next().await;

        let value = mapper.read_scaled_pedal(&mut sensor);
        outputs.write(value);

        polls = polls.wrapping_add(1);
        if REPORT_EVERY != 0 && polls % REPORT_EVERY == 0 {
            report(&sensor, &outputs.0);
        }
    }
}

/// Log the hardware error counters
fn report(sensor: &Sensor, pot: &Pot) {
    let read_errors = sensor.read_errors();
    let write_errors = pot.write_errors();

    if read_errors > 0 || write_errors > 0 {
        warn!(
            "ADC read errors: {}, SPI write errors: {}",
            read_errors, write_errors
        );
    } else {
        debug!("Last raw {}, last wiper {:?}", sensor.last(), pot.last_written());
    }
}
