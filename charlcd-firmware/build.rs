//! Build script for charlcd-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Warns when no board with default I2C pins is selected
//! - Validates display.toml and compiles it into the firmware

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Limits of the HD44780 two-line DDRAM map
const MAX_LINES: i64 = 2;
const MAX_COLUMNS: i64 = 40;

fn main() {
    setup_linker();
    check_board();
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

/// Warn when the build has no default I2C wiring
fn check_board() {
    if env::var_os("CARGO_FEATURE_BOARD_PICO").is_none() {
        println!(
            "cargo:warning=no board feature selected (e.g. board-pico): \
             this firmware needs a board with default I2C pins and will not drive the display"
        );
    }
}

/// Validated display configuration
struct DisplayConfig {
    address: i64,
    lines: i64,
    columns: i64,
    backlight: bool,
    settle_us: i64,
    frequency: i64,
    text: Vec<(i64, i64, String)>,
}

/// Panic with a boxed list of problems
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

/// Look up an integer, recording an error if it is missing or out of range
fn int_in(
    table: &toml::Table,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if range.contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            *range.start()
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            *range.start()
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            *range.start()
        }
    }
}

/// Get a section as a table
fn section<'a>(
    config: &'a toml::Table,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => {
            errors.push(format!("Missing [{}] section", name));
            None
        }
    }
}

/// Validate display.toml configuration at compile time
fn validate_config() -> DisplayConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[e.to_string()]),
    };

    let config: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => {
            let lines: Vec<String> = e
                .to_string()
                .lines()
                .map(|line| line.chars().take(62).collect())
                .collect();
            fail("Invalid TOML syntax in display.toml", &lines);
        }
    };

    let mut errors = Vec::new();

    let mut out = DisplayConfig {
        address: 0x27,
        lines: 2,
        columns: 16,
        backlight: true,
        settle_us: 600,
        frequency: 100_000,
        text: Vec::new(),
    };

    if let Some(lcd) = section(&config, "lcd", &mut errors) {
        out.address = int_in(lcd, "lcd", "address", 0x08..=0x77, &mut errors);
        out.lines = int_in(lcd, "lcd", "lines", 1..=MAX_LINES, &mut errors);
        out.columns = int_in(lcd, "lcd", "columns", 1..=MAX_COLUMNS, &mut errors);
        out.settle_us = int_in(lcd, "lcd", "settle_us", 1..=100_000, &mut errors);
        match lcd.get("backlight") {
            Some(toml::Value::Boolean(b)) => out.backlight = *b,
            Some(_) => errors.push("[lcd] backlight must be true or false".to_string()),
            None => {}
        }
    }

    if let Some(i2c) = section(&config, "i2c", &mut errors) {
        out.frequency = int_in(i2c, "i2c", "frequency", 10_000..=1_000_000, &mut errors);
    }

    match config.get("text") {
        Some(toml::Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                let name = format!("text.{}", i);
                let entry = match entry.as_table() {
                    Some(t) => t,
                    None => {
                        errors.push(format!("[[text]] entry {} must be a table", i));
                        continue;
                    }
                };
                let line = int_in(entry, &name, "line", 0..=MAX_LINES - 1, &mut errors);
                let column = int_in(entry, &name, "column", 0..=MAX_COLUMNS - 1, &mut errors);
                let text = match entry.get("text") {
                    Some(toml::Value::String(s)) if s.is_ascii() => s.clone(),
                    Some(toml::Value::String(_)) => {
                        errors.push(format!("[{}] text must be ASCII", name));
                        continue;
                    }
                    _ => {
                        errors.push(format!("[{}] missing 'text'", name));
                        continue;
                    }
                };
                out.text.push((line, column, text));
            }
        }
        Some(_) => errors.push("[[text]] must be an array of tables".to_string()),
        None => {}
    }

    if !errors.is_empty() {
        fail("Invalid display configuration", &errors);
    }

    // Overflowing text is legal (it lands in off-screen DDRAM) but rarely intended
    for (line, column, text) in &out.text {
        if *line >= out.lines {
            println!(
                "cargo:warning=display.toml: text {:?} is on line {} of a {}-line display",
                text, line, out.lines
            );
        } else if column + text.len() as i64 > out.columns {
            println!(
                "cargo:warning=display.toml: text {:?} at column {} runs past column {}",
                text,
                column,
                out.columns - 1
            );
        }
    }

    out
}

/// Write display_config.rs for the firmware to include
fn generate_config(config: &DisplayConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let text = config
        .text
        .iter()
        .map(|(line, column, text)| {
            format!("    TextLine::new({}, {}, {:?}),\n", line, column, text)
        })
        .collect::<String>();

    let source = format!(
        "/// LCD module settings from display.toml\n\
         pub const LCD: LcdConfig = LcdConfig::new({:#04x})\n\
         \x20   .with_backlight({})\n\
         \x20   .with_geometry(Geometry::new({}, {}))\n\
         \x20   .with_settle_us({});\n\
         \n\
         /// I2C bus settings from display.toml\n\
         pub const I2C: I2cConfig = I2cConfig {{ frequency: {} }};\n\
         \n\
         /// Startup text from display.toml\n\
         pub const TEXT: &[TextLine] = &[\n{}];\n",
        config.address,
        config.backlight,
        config.lines,
        config.columns,
        config.settle_us,
        config.frequency,
        text
    );

    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}
