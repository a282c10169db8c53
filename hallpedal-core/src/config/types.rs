//! Configuration type definitions

/// Smallest supported ADC resolution in bits
pub const MIN_ADC_BITS: u8 = 2;

/// Largest supported ADC resolution in bits
///
/// Keeps `(raw - offset) * 256` inside an `i32` accumulator.
pub const MAX_ADC_BITS: u8 = 16;

/// Default ADC resolution (ATtiny-class 10-bit converter)
pub const DEFAULT_ADC_BITS: u8 = 10;

/// Default number of warm-up samples
pub const DEFAULT_WARMUP_COUNT: u8 = 10;

/// Default dead-zone divisor (roughly one sixth of the span)
pub const DEFAULT_DEAD_ZONE_DIVISOR: i16 = 6;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// ADC resolution outside `MIN_ADC_BITS..=MAX_ADC_BITS`
    AdcBitsOutOfRange(u8),
    /// Dead-zone divisor must be at least 1
    InvalidDeadZoneDivisor(i16),
}

/// Pedal mapper configuration
///
/// Fields are private so that a constructed value is always valid; use
/// [`MapperConfig::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MapperConfig {
    adc_bits: u8,
    warmup_count: u8,
    dead_zone_divisor: i16,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            adc_bits: DEFAULT_ADC_BITS,
            warmup_count: DEFAULT_WARMUP_COUNT,
            dead_zone_divisor: DEFAULT_DEAD_ZONE_DIVISOR,
        }
    }
}

impl MapperConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    /// - `adc_bits`: native ADC resolution (2..=16)
    /// - `warmup_count`: samples discarded before seeding, and fed through
    ///   the bound update after seeding
    /// - `dead_zone_divisor`: fraction of the span clipped near the pressed end
    pub const fn new(
        adc_bits: u8,
        warmup_count: u8,
        dead_zone_divisor: i16,
    ) -> Result<Self, ConfigError> {
        if adc_bits < MIN_ADC_BITS || adc_bits > MAX_ADC_BITS {
            return Err(ConfigError::AdcBitsOutOfRange(adc_bits));
        }
        if dead_zone_divisor < 1 {
            return Err(ConfigError::InvalidDeadZoneDivisor(dead_zone_divisor));
        }
        Ok(Self {
            adc_bits,
            warmup_count,
            dead_zone_divisor,
        })
    }

    /// ADC resolution in bits
    pub const fn adc_bits(&self) -> u8 {
        self.adc_bits
    }

    /// Number of warm-up samples
    pub const fn warmup_count(&self) -> u8 {
        self.warmup_count
    }

    /// Dead-zone divisor
    pub const fn dead_zone_divisor(&self) -> i16 {
        self.dead_zone_divisor
    }

    /// Middle of the ADC range (512 for a 10-bit converter)
    pub const fn adc_midpoint(&self) -> u16 {
        1 << (self.adc_bits - 1)
    }

    /// Largest raw value the ADC can produce
    pub const fn adc_max(&self) -> u16 {
        ((1u32 << self.adc_bits) - 1) as u16
    }
}
