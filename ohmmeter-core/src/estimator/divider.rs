//! Voltage divider math
//!
//! Circuit: 3V3 -- R_known -- ADC_PIN -- R_x -- GND
//!
//! R_x = R_known * adc / (adc_max - adc)

use super::EstimateError;

/// Convert an averaged ADC sample to the unknown resistance in ohms
///
/// `average_sample` must lie in `[0, adc_resolution)`. A sample at full
/// scale means the divider is open and is reported as
/// [`EstimateError::OpenCircuit`] instead of dividing by zero.
pub fn resistance_from_sample(
    average_sample: f32,
    known_resistance: f32,
    adc_resolution: f32,
) -> Result<f32, EstimateError> {
    if !known_resistance.is_finite() || known_resistance <= 0.0 {
        return Err(EstimateError::InvalidReference);
    }

    if !average_sample.is_finite() || average_sample < 0.0 {
        return Err(EstimateError::InvalidSample);
    }

    if average_sample >= adc_resolution {
        return Err(EstimateError::OpenCircuit);
    }

    let resistance = known_resistance * average_sample / (adc_resolution - average_sample);

    if resistance.is_finite() {
        Ok(resistance)
    } else {
        Err(EstimateError::NonFinite)
    }
}
