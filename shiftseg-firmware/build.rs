//! Build script for shiftseg-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time
//! - Generates the display configuration and pin takeover macro

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Lowest full-cycle refresh rate that does not flicker
const MIN_REFRESH_HZ: i64 = 50;

/// Shortest clock / strobe pulse the registers accept
const MIN_PULSE_NS: i64 = 1000;

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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Display settings after validation
struct DisplaySettings {
    polarity: &'static str,
    digits: i64,
    leading_zeros: bool,
    sign: &'static str,
    brightness: i64,
    slot_period_us: i64,
    clock_high_ns: i64,
    strobe_high_ns: i64,
    data_setup_ns: i64,
    data_pin: i64,
    clock_pin: i64,
    strobe_pin: i64,
}

/// Validate display.toml configuration at compile time
fn validate_config() -> DisplaySettings {
    // Re-run if display.toml changes
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the shiftseg-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_required_sections(&config);
    let mut settings = validate_display(&config);
    validate_pins(&config, &mut settings);

    println!("cargo:warning=display.toml validated successfully");
    settings
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a boxed list of errors
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
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

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    if config.get("display").and_then(|d| d.as_table()).is_none() {
        errors.push("Missing [display] section".to_string());
    }
    if config.get("pins").and_then(|p| p.as_table()).is_none() {
        errors.push("Missing [pins] section".to_string());
    }

    report("Missing required sections in display.toml", &errors);
}

/// Read an integer key, recording an error when present but out of range
fn integer(
    table: &toml::Table,
    section: &str,
    key: &str,
    default: Option<i64>,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    let fallback = default.unwrap_or(*range.start());
    match table.get(key) {
        Some(toml::Value::Integer(value)) => {
            if !range.contains(value) {
                errors.push(format!(
                    "[{}] {} must be {}-{}",
                    section,
                    key,
                    range.start(),
                    range.end()
                ));
            }
            *value
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            fallback
        }
        None => {
            if default.is_none() {
                errors.push(format!("[{}] missing '{}'", section, key));
            }
            fallback
        }
    }
}

/// Validate the [display] section
fn validate_display(config: &toml::Value) -> DisplaySettings {
    let empty = toml::Table::new();
    let display = config
        .get("display")
        .and_then(|d| d.as_table())
        .unwrap_or(&empty);

    let mut errors = Vec::new();

    let polarity = match display.get("polarity") {
        Some(toml::Value::String(p)) if p == "common_anode" => "CommonAnode",
        Some(toml::Value::String(p)) if p == "common_cathode" => "CommonCathode",
        Some(_) => {
            errors.push(
                "[display] polarity must be 'common_anode' or 'common_cathode'".to_string(),
            );
            "CommonAnode"
        }
        None => {
            errors.push("[display] missing 'polarity'".to_string());
            "CommonAnode"
        }
    };

    let sign = match display.get("sign") {
        None => "Blank",
        Some(toml::Value::String(s)) if s == "blank" => "Blank",
        Some(toml::Value::String(s)) if s == "dash" => "Dash",
        Some(_) => {
            errors.push("[display] sign must be 'blank' or 'dash'".to_string());
            "Blank"
        }
    };

    let leading_zeros = match display.get("leading_zeros") {
        None => false,
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[display] leading_zeros must be true or false".to_string());
            false
        }
    };

    let digits = integer(display, "display", "digits", None, 1..=8, &mut errors);
    let brightness = integer(display, "display", "brightness", Some(100), 0..=100, &mut errors);
    let slot_period_us = integer(
        display,
        "display",
        "slot_period_us",
        Some(2000),
        1..=1_000_000,
        &mut errors,
    );
    let clock_high_ns = integer(
        display,
        "display",
        "clock_high_ns",
        Some(1000),
        MIN_PULSE_NS..=1_000_000,
        &mut errors,
    );
    let strobe_high_ns = integer(
        display,
        "display",
        "strobe_high_ns",
        Some(1000),
        MIN_PULSE_NS..=1_000_000,
        &mut errors,
    );
    let data_setup_ns = integer(
        display,
        "display",
        "data_setup_ns",
        Some(0),
        0..=1_000_000,
        &mut errors,
    );

    // Full pass over all digits must stay above the flicker threshold
    if errors.is_empty() {
        let cycle_us = slot_period_us * digits;
        if 1_000_000 / cycle_us < MIN_REFRESH_HZ {
            errors.push(format!(
                "[display] refresh {} Hz below {} Hz",
                1_000_000 / cycle_us,
                MIN_REFRESH_HZ
            ));
        }
    }

    report("Invalid display configuration", &errors);

    DisplaySettings {
        polarity,
        digits,
        leading_zeros,
        sign,
        brightness,
        slot_period_us,
        clock_high_ns,
        strobe_high_ns,
        data_setup_ns,
        data_pin: 0,
        clock_pin: 0,
        strobe_pin: 0,
    }
}

/// Validate the [pins] section
fn validate_pins(config: &toml::Value, settings: &mut DisplaySettings) {
    let empty = toml::Table::new();
    let pins = config
        .get("pins")
        .and_then(|p| p.as_table())
        .unwrap_or(&empty);

    let mut errors = Vec::new();

    settings.data_pin = integer(pins, "pins", "data", None, 0..=29, &mut errors);
    settings.clock_pin = integer(pins, "pins", "clock", None, 0..=29, &mut errors);
    settings.strobe_pin = integer(pins, "pins", "strobe", None, 0..=29, &mut errors);

    if errors.is_empty() {
        let assigned = [settings.data_pin, settings.clock_pin, settings.strobe_pin];
        for (i, pin) in assigned.iter().enumerate() {
            if assigned[..i].contains(pin) {
                errors.push(format!("[pins] GPIO{} assigned more than once", pin));
            }
        }
    }

    report("Invalid pin configuration", &errors);
}

/// Write display_config.rs into OUT_DIR
fn generate_config(settings: &DisplaySettings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let code = format!(
        "// Generated by build.rs from display.toml\n\
        \n\
        /// Display configuration from display.toml\n\
        pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {{\n    \
            polarity: DisplayPolarity::{polarity},\n    \
            digit_count: {digits},\n    \
            leading_zeros: {leading_zeros},\n    \
            sign_style: SignStyle::{sign},\n    \
            brightness: {brightness},\n    \
            slot_period_us: {slot_period_us},\n    \
            timing: PulseTiming {{\n        \
                data_setup_ns: {data_setup_ns},\n        \
                clock_high_ns: {clock_high_ns},\n        \
                strobe_high_ns: {strobe_high_ns},\n    \
            }},\n\
        }};\n\
        \n\
        /// Take the (data, clock, strobe) pins named in display.toml\n\
        macro_rules! display_pins {{\n    \
            ($p:expr) => {{\n        \
                (\n            \
                    take_pin!($p, {data_pin}),\n            \
                    take_pin!($p, {clock_pin}),\n            \
                    take_pin!($p, {strobe_pin}),\n        \
                )\n    \
            }};\n\
        }}\n",
        polarity = settings.polarity,
        digits = settings.digits,
        leading_zeros = settings.leading_zeros,
        sign = settings.sign,
        brightness = settings.brightness,
        slot_period_us = settings.slot_period_us,
        data_setup_ns = settings.data_setup_ns,
        clock_high_ns = settings.clock_high_ns,
        strobe_high_ns = settings.strobe_high_ns,
        data_pin = settings.data_pin,
        clock_pin = settings.clock_pin,
        strobe_pin = settings.strobe_pin,
    );

    fs::write(out_dir.join("display_config.rs"), code).unwrap();
}
