//! Configuration type definitions
//!
//! These types represent the meter configuration. The firmware embeds a
//! `meter.toml` and parses it at boot; defaults match the reference board
//! (9.85K divider resistor, 12-bit ADC, 500-sample window).

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Voltage divider settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DividerConfig {
    /// Measured value of the reference resistor in ohms
    pub known_ohms: u32,
    /// ADC full-scale reading (4095 for 12-bit)
    pub adc_resolution: u16,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            known_ohms: 9850,
            adc_resolution: 4095,
        }
    }
}

/// ADC sampling loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SamplingConfig {
    /// Readings averaged per measurement
    pub window: u16,
    /// Delay between readings (ms)
    pub sample_interval_ms: u16,
    /// Delay after each measurement is shown (ms)
    pub cycle_delay_ms: u16,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            window: 500,
            sample_interval_ms: 1,
            cycle_delay_ms: 700,
        }
    }
}

/// LED matrix settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MatrixConfig {
    /// Global brightness in percent (0-100)
    pub brightness_pct: u8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            brightness_pct: crate::matrix::DEFAULT_BRIGHTNESS_PCT,
        }
    }
}

/// OLED display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// I2C clock (Hz)
    pub i2c_frequency_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x3C,
            i2c_frequency_hz: 400_000,
        }
    }
}

/// Complete meter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MeterConfig {
    pub divider: DividerConfig,
    pub sampling: SamplingConfig,
    pub matrix: MatrixConfig,
    pub display: DisplayConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Reference resistor must be above zero
    InvalidReference,
    /// ADC resolution must be above zero
    InvalidResolution,
    /// Sampling window must hold at least one reading
    EmptyWindow,
    /// Brightness above 100%
    BrightnessOutOfRange,
    /// I2C address does not fit in 7 bits
    InvalidI2cAddress,
    /// I2C clock of zero
    InvalidI2cFrequency,
}

impl MeterConfig {
    /// Check that the configuration can drive the meter
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divider.known_ohms == 0 {
            return Err(ConfigError::InvalidReference);
        }
        if self.divider.adc_resolution == 0 {
            return Err(ConfigError::InvalidResolution);
        }
        if self.sampling.window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.matrix.brightness_pct > 100 {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.display.i2c_address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress);
        }
        if self.display.i2c_frequency_hz == 0 {
            return Err(ConfigError::InvalidI2cFrequency);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MeterConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.divider.known_ohms, 9850);
        assert_eq!(config.divider.adc_resolution, 4095);
        assert_eq!(config.sampling.window, 500);
        assert_eq!(config.sampling.cycle_delay_ms, 700);
        assert_eq!(config.matrix.brightness_pct, 5);
        assert_eq!(config.display.i2c_address, 0x3C);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = MeterConfig::default();
        config.divider.known_ohms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidReference));

        let mut config = MeterConfig::default();
        config.divider.adc_resolution = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidResolution));

        let mut config = MeterConfig::default();
        config.sampling.window = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyWindow));

        let mut config = MeterConfig::default();
        config.matrix.brightness_pct = 101;
        assert_eq!(config.validate(), Err(ConfigError::BrightnessOutOfRange));

        let mut config = MeterConfig::default();
        config.display.i2c_address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidI2cAddress));

        let mut config = MeterConfig::default();
        config.display.i2c_frequency_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidI2cFrequency));
    }
}
