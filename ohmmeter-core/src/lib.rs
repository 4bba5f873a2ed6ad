//! Board-agnostic core logic for the ohmmeter firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Voltage divider resistance estimation
//! - E24 nearest-value search and 3-band color decoding
//! - Resistor color table (names and LED colors)
//! - LED matrix layout for the band display
//! - ADC sample averaging and the per-cycle measurement pipeline
//! - Configuration types and the embedded TOML parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod estimator;
pub mod matrix;
pub mod measurement;
pub mod sampling;

pub use color::{color_name, BandColor};
pub use estimator::{
    decode_color_bands, nearest_e24, resistance_from_sample, ColorBands, E24Match, EstimateError,
};
pub use matrix::{led_index, MatrixFrame};
pub use measurement::Measurement;
pub use sampling::Averager;
