//! Resistance estimation
//!
//! Turns an averaged ADC sample into ohms, snaps that to the nearest E24
//! preferred value and decodes the 3-band color code.

pub mod bands;
pub mod divider;
pub mod e24;

pub use bands::{decode_color_bands, ColorBands};
pub use divider::resistance_from_sample;
pub use e24::{nearest_e24, E24Match, E24_CANDIDATES, E24_TENTHS, MAX_DECADE};

/// Errors that can occur while estimating a resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EstimateError {
    /// Sample at or above full scale (nothing connected to the divider)
    OpenCircuit,
    /// Sample negative or not a number
    InvalidSample,
    /// Reference resistor not positive or not a number
    InvalidReference,
    /// Divider produced an infinite or NaN result
    NonFinite,
}
