//! Display abstraction traits and the measurement screen
//!
//! This crate provides:
//! - `DisplayBackend` / `GraphicsDisplayBackend` traits for pixel displays
//! - `MeasurementScreen`, the 128x64 layout showing the ADC value, the
//!   estimated resistance, the three band color names and a resistor glyph
//!
//! # Architecture
//!
//! The firmware implements the backend traits for its panel (SSD1306 over
//! I2C) and hands each measurement to `MeasurementScreen::render`. Layout
//! stays host-testable against a recording backend.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, GraphicsDisplayBackend, Ink};
pub use screen::{MeasurementScreen, SCREEN_HEIGHT, SCREEN_WIDTH};
