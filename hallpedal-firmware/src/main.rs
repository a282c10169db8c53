//! Hallpedal - Hall-effect pedal firmware
//!
//! Main firmware binary for RP2040-based pedal boards. Reads a Hall-effect
//! sensor, learns its polarity and range on the fly, and drives a digital
//! potentiometer so the pedal behaves like the film potentiometer it
//! replaces.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod boards;
mod config;
mod observer;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hallpedal firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = boards::Board::new(p);
    let mapper_config = config::mapper_config();
    info!(
        "Mapper config: {}-bit ADC, {} warm-up samples, dead zone 1/{}",
        mapper_config.adc_bits(),
        mapper_config.warmup_count(),
        mapper_config.dead_zone_divisor()
    );

    spawner
        .spawn(tasks::pedal_task(
            board.sensor,
            board.pot,
            board.indicator,
            mapper_config,
        ))
        .unwrap();

    info!("All tasks spawned");
}
