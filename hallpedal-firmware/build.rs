//! Build script for hallpedal-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates pedal.toml at compile time
//! - Generates `pedal_config.rs` with the validated values as constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values extracted from pedal.toml
struct PedalConfig {
    adc_bits: i64,
    warmup_samples: i64,
    dead_zone_divisor: i64,
    pot_select: &'static str,
    half_period_ns: i64,
    indicator_enabled: bool,
    indicator_threshold: i64,
    indicator_active_low: bool,
    poll_interval_ms: i64,
    report_every: i64,
}

/// Print a boxed error and abort the build
fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate pedal.toml configuration at compile time
fn validate_config() -> PedalConfig {
    // Re-run if pedal.toml changes
    println!("cargo:rerun-if-changed=pedal.toml");

    let config_path = Path::new("pedal.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read pedal.toml", &[e.to_string()]),
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in pedal.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    for section in ["sensor", "mapper", "potentiometer", "indicator", "loop"] {
        match config.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => errors.push(format!("[{}] must be a table", section)),
            None => errors.push(format!("Missing [{}] section", section)),
        }
    }
    if !errors.is_empty() {
        fail("Missing required sections in pedal.toml", &errors);
    }

    let adc_bits = integer(&config, "sensor", "adc_bits", 2..=16, &mut errors);
    let warmup_samples = integer(&config, "sensor", "warmup_samples", 0..=255, &mut errors);
    let dead_zone_divisor = integer(&config, "mapper", "dead_zone_divisor", 1..=1000, &mut errors);
    let half_period_ns = integer(&config, "potentiometer", "half_period_ns", 0..=1_000_000, &mut errors);
    let indicator_threshold = integer(&config, "indicator", "threshold", 0..=255, &mut errors);
    let poll_interval_ms = integer(&config, "loop", "poll_interval_ms", 1..=1000, &mut errors);
    let report_every = integer(&config, "loop", "report_every", 0..=u32::MAX as i64, &mut errors);
    let indicator_enabled = boolean(&config, "indicator", "enabled", &mut errors);
    let indicator_active_low = boolean(&config, "indicator", "active_low", &mut errors);

    let pot_select = match config["potentiometer"].get("select") {
        Some(toml::Value::String(s)) if s == "pot0" => "Pot0",
        Some(toml::Value::String(s)) if s == "pot1" => "Pot1",
        Some(toml::Value::String(s)) if s == "both" => "Both",
        Some(_) => {
            errors.push("[potentiometer] select must be 'pot0', 'pot1', or 'both'".to_string());
            "Pot0"
        }
        None => {
            errors.push("[potentiometer] missing 'select'".to_string());
            "Pot0"
        }
    };

    if !errors.is_empty() {
        fail("Invalid configuration in pedal.toml", &errors);
    }

    println!("cargo:warning=pedal.toml validated successfully");

    PedalConfig {
        adc_bits,
        warmup_samples,
        dead_zone_divisor,
        pot_select,
        half_period_ns,
        indicator_enabled,
        indicator_threshold,
        indicator_active_low,
        poll_interval_ms,
        report_every,
    }
}

/// Read a required integer field and check its range
fn integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match config[section].get(key) {
        Some(toml::Value::Integer(v)) if range.contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Read a required boolean field
fn boolean(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> bool {
    match config[section].get(key) {
        Some(toml::Value::Boolean(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            false
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            false
        }
    }
}

/// Write the validated values as Rust constants
fn generate_config(config: &PedalConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("pedal_config.rs")).unwrap();

    writeln!(f, "// Generated from pedal.toml by build.rs").unwrap();
    writeln!(f, "pub const ADC_BITS: u8 = {};", config.adc_bits).unwrap();
    writeln!(f, "pub const WARMUP_SAMPLES: u8 = {};", config.warmup_samples).unwrap();
    writeln!(f, "pub const DEAD_ZONE_DIVISOR: i16 = {};", config.dead_zone_divisor).unwrap();
    writeln!(
        f,
        "pub const POT_SELECT: PotSelect = PotSelect::{};",
        config.pot_select
    )
    .unwrap();
    writeln!(f, "pub const SPI_HALF_PERIOD_NS: u32 = {};", config.half_period_ns).unwrap();
    writeln!(f, "pub const INDICATOR_ENABLED: bool = {};", config.indicator_enabled).unwrap();
    writeln!(f, "pub const INDICATOR_THRESHOLD: u8 = {};", config.indicator_threshold).unwrap();
    writeln!(f, "pub const INDICATOR_ACTIVE_LOW: bool = {};", config.indicator_active_low).unwrap();
    writeln!(f, "pub const POLL_INTERVAL_MS: u64 = {};", config.poll_interval_ms).unwrap();
    writeln!(f, "pub const REPORT_EVERY: u32 = {};", config.report_every).unwrap();
}
