//! Simple TOML parser for meter configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the meter configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (unsigned integers)
//! - Decimal, `0x` hexadecimal (lowercase prefix only) and `_`-separated integers
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Strings, floats, booleans, arrays, inline tables
//! - Dotted keys or dotted section headers

use super::types::MeterConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Value is not an integer or does not fit the field
    InvalidValue,
    /// Line is neither a header nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Divider,
    Sampling,
    Matrix,
    Display,
}

/// Parse TOML configuration into MeterConfig
///
/// Keys that are not present keep their default value.
pub fn parse_config(input: &str) -> Result<MeterConfig, ParseError> {
    let mut config = MeterConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse section header like "divider"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "divider" => Ok(Section::Divider),
        "sampling" => Ok(Section::Sampling),
        "matrix" => Ok(Section::Matrix),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an unsigned integer (decimal or 0x hex, `_` separators allowed)
///
/// The hex prefix must be lowercase `0x`, as in TOML itself.
fn parse_u32(value: &str) -> Result<u32, ParseError> {
    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(ParseError::InvalidValue);
    }

    let mut result: u32 = 0;
    for ch in digits.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ParseError::InvalidValue)?;
    }

    Ok(result)
}

fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    T::try_from(parse_u32(value)?).map_err(|_| ParseError::InvalidValue)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MeterConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Divider, "known_ohms") => config.divider.known_ohms = parse_int(value)?,
        (Section::Divider, "adc_resolution") => {
            config.divider.adc_resolution = parse_int(value)?
        }
        (Section::Sampling, "window") => config.sampling.window = parse_int(value)?,
        (Section::Sampling, "sample_interval_ms") => {
            config.sampling.sample_interval_ms = parse_int(value)?
        }
        (Section::Sampling, "cycle_delay_ms") => {
            config.sampling.cycle_delay_ms = parse_int(value)?
        }
        (Section::Matrix, "brightness_pct") => config.matrix.brightness_pct = parse_int(value)?,
        (Section::Display, "i2c_address") => config.display.i2c_address = parse_int(value)?,
        (Section::Display, "i2c_frequency_hz") => {
            config.display.i2c_frequency_hz = parse_int(value)?
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}
