//! Per-cycle measurement pipeline
//!
//! sample → resistance → nearest E24 value → color bands

use crate::config::DividerConfig;
use crate::estimator::{
    decode_color_bands, nearest_e24, resistance_from_sample, ColorBands, E24Match, EstimateError,
};
use crate::matrix::MatrixFrame;

/// Result of one sampling cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Averaged raw ADC reading
    pub average_sample: f32,
    /// Estimated resistance in ohms
    pub resistance: f32,
    /// Closest E24 value
    pub nearest: E24Match,
    /// Color code of the E24 value
    pub bands: ColorBands,
}

impl Measurement {
    /// Run the full estimation chain on an averaged sample
    pub fn from_sample(average_sample: f32, divider: &DividerConfig) -> Result<Self, EstimateError> {
        let resistance = resistance_from_sample(
            average_sample,
            divider.known_ohms as f32,
            divider.adc_resolution as f32,
        )?;
        let nearest = nearest_e24(resistance);
        let bands = decode_color_bands(nearest.value);

        Ok(Self {
            average_sample,
            resistance,
            nearest,
            bands,
        })
    }

    /// LED matrix frame for this measurement
    pub fn frame(&self) -> MatrixFrame {
        MatrixFrame::from_bands(&self.bands)
    }
}
