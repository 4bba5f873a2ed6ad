//! Display backends
//!
//! The screen layout lives in ohmmeter-display; this module only adapts
//! the on-board SSD1306 to its backend traits.

mod oled;

pub use oled::OledBackend;
