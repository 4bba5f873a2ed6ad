//! Averaged ADC reads
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28 (divider tap on the reference board)
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Async, Channel, Error as RpAdcError};
use embassy_time::{Duration, Timer};

use ohmmeter_core::Averager;

/// ADC read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// A conversion failed
    Conversion,
    /// Window of zero readings requested
    EmptyWindow,
}

impl From<RpAdcError> for AdcError {
    fn from(_: RpAdcError) -> Self {
        AdcError::Conversion
    }
}

/// Single-channel ADC that averages a window of readings
///
/// Owns the ADC peripheral and the divider channel for the life of the
/// firmware.
pub struct AveragingAdc<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
    /// Most recent raw reading, kept for diagnostics
    last_raw: u16,
}

impl<'d> AveragingAdc<'d> {
    /// Wrap an ADC and the channel to sample
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last_raw: 0,
        }
    }

    /// Take one conversion
    pub async fn read_raw(&mut self) -> Result<u16, AdcError> {
        let raw = self.adc.read(&mut self.channel).await?;
        self.last_raw = raw;
        Ok(raw)
    }

    /// Take `window` conversions `interval` apart and return their mean
    ///
    /// The first failed conversion aborts the window.
    pub async fn read_averaged(&mut self, window: u16, interval: Duration) -> Result<f32, AdcError> {
        let mut averager = Averager::new();

        for _ in 0..window {
            let raw = self.read_raw().await?;
            averager.push(raw);
            Timer::after(interval).await;
        }

        averager.mean().ok_or(AdcError::EmptyWindow)
    }

    /// Most recent raw reading
    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }
}
