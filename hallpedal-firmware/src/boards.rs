//! Board wiring
//!
//! Raspberry Pi Pico pinout:
//!
//! | Signal          | GPIO | Notes                          |
//! |-----------------|------|--------------------------------|
//! | Hall sensor     | 28   | ADC2                           |
//! | Pot SCK         | 2    | bit-banged SPI, mode 0         |
//! | Pot MOSI (SI)   | 3    |                                |
//! | Pot CS          | 5    | active low                     |
//! | Indicator LED   | 25   | on-board LED                   |

use embassy_rp::Peripherals;
use embassy_time::Delay;

use hallpedal_drivers::digipot::Mcp4xxxx;
use hallpedal_drivers::indicator::IndicatorLed;
use hallpedal_drivers::sensor::HallSensor;
use hallpedal_drivers::spi::{BitBangSpi, NoMiso};
use hallpedal_hal::spi::Mode;
use hallpedal_hal_rp2040::adc::RpAdc;
use hallpedal_hal_rp2040::gpio::{self, HalOutput};

use crate::config::{
    INDICATOR_ACTIVE_LOW, INDICATOR_ENABLED, INDICATOR_THRESHOLD, POT_SELECT, SPI_HALF_PERIOD_NS,
};

/// Hall sensor on the ADC
pub type Sensor = HallSensor<RpAdc<'static>>;

/// Software SPI bus to the potentiometer (write-only)
pub type PotBus = BitBangSpi<HalOutput<'static>, NoMiso, HalOutput<'static>, Delay>;

/// Digital potentiometer
pub type Pot = Mcp4xxxx<PotBus, HalOutput<'static>>;

/// Threshold LED
pub type Indicator = IndicatorLed<HalOutput<'static>>;

/// Everything the pedal task needs
pub struct Board {
    pub sensor: Sensor,
    pub pot: Pot,
    pub indicator: Option<Indicator>,
}

impl Board {
    /// Claim and configure the peripherals
    pub fn new(p: Peripherals) -> Self {
        let sensor = HallSensor::new(RpAdc::new(p.ADC, p.PIN_28));

        // chip select is active low; keep it deselected from the first cycle
        let cs = gpio::output(p.PIN_5, true);
        let bus = BitBangSpi::new(
            gpio::output(p.PIN_3, false),
            NoMiso,
            gpio::output(p.PIN_2, false),
            Delay,
            Mode::Mode0,
        )
        .with_half_period_ns(SPI_HALF_PERIOD_NS);
        let pot = Mcp4xxxx::new(bus, cs, POT_SELECT);

        let indicator = INDICATOR_ENABLED.then(|| {
            IndicatorLed::new(
                gpio::output(p.PIN_25, INDICATOR_ACTIVE_LOW),
                INDICATOR_THRESHOLD,
                INDICATOR_ACTIVE_LOW,
            )
        });

        Self {
            sensor,
            pot,
            indicator,
        }
    }
}
