//! Measurement screen
//!
//! Layout on a 128x64 panel:
//!
//! ```text
//! ┌─────┬──────────────────┐
//! │ ADC │ Resisten.        │
//! │ 1323│ 4700             │
//! ├─────┴──────────────────┤
//! │ Yellow     ▐█│▌▌▌│█▌   │
//! │ Violet                 │
//! │ Red                    │
//! └────────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;
use ohmmeter_core::{EstimateError, Measurement};

use crate::backend::{DisplayError, GraphicsDisplayBackend, Ink};

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 64;

/// Maximum characters in a value field
pub const VALUE_LEN: usize = 12;

/// Header/value column x positions
const ADC_COL_X: u16 = 9;
const OHMS_COL_X: u16 = 47;

/// Header and value row y positions
const HEADER_Y: u16 = 5;
const VALUE_Y: u16 = 13;

/// Band name rows
const BAND_ROWS_Y: [u16; 3] = [30, 39, 48];

/// Measurement screen buffer
///
/// Holds the formatted text for the latest measurement and draws it
/// to any `GraphicsDisplayBackend`.
#[derive(Clone)]
pub struct MeasurementScreen {
    /// Averaged ADC reading, rounded
    sample: String<VALUE_LEN>,
    /// Resistance, rounded, or a fault label
    resistance: String<VALUE_LEN>,
    /// Band color names, `None` when there is no valid reading
    bands: Option<[&'static str; 3]>,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for MeasurementScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementScreen {
    /// Create an empty screen
    pub fn new() -> Self {
        Self {
            sample: String::new(),
            resistance: String::new(),
            bands: None,
            dirty: true,
        }
    }

    /// Load a successful measurement
    pub fn set_measurement(&mut self, measurement: &Measurement) {
        self.update(
            format_rounded(measurement.average_sample),
            format_rounded(measurement.resistance),
            Some(measurement.bands.colors().map(|c| c.name())),
        );
    }

    /// Load a failed estimate
    ///
    /// The ADC value is still shown so a saturated divider is visible.
    pub fn set_fault(&mut self, average_sample: f32, error: EstimateError) {
        let mut resistance = String::new();
        let _ = resistance.push_str(fault_label(error));
        self.update(format_rounded(average_sample), resistance, None);
    }

    /// Store new content, marking the screen dirty only if it differs
    fn update(
        &mut self,
        sample: String<VALUE_LEN>,
        resistance: String<VALUE_LEN>,
        bands: Option<[&'static str; 3]>,
    ) {
        if self.sample != sample || self.resistance != resistance || self.bands != bands {
            self.sample = sample;
            self.resistance = resistance;
            self.bands = bands;
            self.dirty = true;
        }
    }

    /// Formatted ADC value
    pub fn sample_text(&self) -> &str {
        self.sample.as_str()
    }

    /// Formatted resistance or fault label
    pub fn resistance_text(&self) -> &str {
        self.resistance.as_str()
    }

    /// Band color names
    pub fn band_names(&self) -> Option<[&'static str; 3]> {
        self.bands
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draw the screen and flush it
    ///
    /// Does nothing if the content has not changed since the last render.
    /// Panels smaller than 128x64 are rejected before anything is drawn.
    pub fn render<B: GraphicsDisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !self.dirty {
            return Ok(());
        }

        let (width, height) = backend.dimensions();
        if width < SCREEN_WIDTH || height < SCREEN_HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }

        backend.clear()?;
        draw_frame(backend)?;

        backend.draw_text(ADC_COL_X, HEADER_Y, "ADC")?;
        backend.draw_text(OHMS_COL_X, HEADER_Y, "Resisten.")?;
        backend.draw_text(ADC_COL_X, VALUE_Y, &self.sample)?;
        backend.draw_text(OHMS_COL_X, VALUE_Y, &self.resistance)?;

        if let Some(names) = self.bands {
            for (name, y) in names.iter().zip(BAND_ROWS_Y) {
                backend.draw_text(ADC_COL_X, y, name)?;
            }
            draw_resistor(backend)?;
        }

        backend.flush()?;
        self.dirty = false;
        Ok(())
    }
}

/// Outer border plus the header grid lines
fn draw_frame<B: GraphicsDisplayBackend>(backend: &mut B) -> Result<(), DisplayError> {
    backend.draw_rect(3, 3, 122, 60)?;
    backend.draw_hline(3, 21, 121, Ink::On)?;
    backend.draw_vline(41, 4, 17, Ink::On)
}

/// Resistor glyph: two leads, a body and three band stripes
fn draw_resistor<B: GraphicsDisplayBackend>(backend: &mut B) -> Result<(), DisplayError> {
    backend.draw_rect(80, 32, 10, 20)?;
    backend.draw_rect(110, 32, 10, 20)?;
    backend.draw_rect(90, 34, 20, 16)?;

    for x in [90, 98, 106] {
        backend.fill_rect(x, 34, 4, 16)?;
    }

    // Open the joints between the leads and the body
    backend.draw_vline(89, 35, 14, Ink::Off)?;
    backend.draw_vline(110, 35, 14, Ink::Off)
}

fn format_rounded(value: f32) -> String<VALUE_LEN> {
    let mut s = String::new();
    if write!(s, "{:.0}", value).is_err() {
        s.clear();
        let _ = s.push_str("---");
    }
    s
}

fn fault_label(error: EstimateError) -> &'static str {
    match error {
        EstimateError::OpenCircuit => "OPEN",
        EstimateError::InvalidSample | EstimateError::InvalidReference => "ERR",
        EstimateError::NonFinite => "OVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DisplayBackend;
    use ohmmeter_core::config::DividerConfig;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Text(u16, u16, std::string::String),
        HLine(u16, u16, u16, Ink),
        VLine(u16, u16, u16, Ink),
        Rect(u16, u16, u16, u16),
        Fill(u16, u16, u16, u16),
        Flush,
    }

    struct RecordingBackend {
        ops: Vec<Op>,
        size: (u16, u16),
    }

    impl Default for RecordingBackend {
        fn default() -> Self {
            Self {
                ops: Vec::new(),
                size: (SCREEN_WIDTH, SCREEN_HEIGHT),
            }
        }
    }

    impl RecordingBackend {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(_, _, t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayBackend for RecordingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(x, y, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Flush);
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            self.size
        }
    }

    impl GraphicsDisplayBackend for RecordingBackend {
        fn draw_hline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError> {
            self.ops.push(Op::HLine(x, y, length, ink));
            Ok(())
        }

        fn draw_vline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError> {
            self.ops.push(Op::VLine(x, y, length, ink));
            Ok(())
        }

        fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
            self.ops.push(Op::Rect(x, y, width, height));
            Ok(())
        }

        fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
            self.ops.push(Op::Fill(x, y, width, height));
            Ok(())
        }
    }

    struct FailingBackend;

    impl DisplayBackend for FailingBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }

        fn draw_text(&mut self, _x: u16, _y: u16, _text: &str) -> Result<(), DisplayError> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            (SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl GraphicsDisplayBackend for FailingBackend {
        fn draw_hline(&mut self, _: u16, _: u16, _: u16, _: Ink) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_vline(&mut self, _: u16, _: u16, _: u16, _: Ink) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_rect(&mut self, _: u16, _: u16, _: u16, _: u16) -> Result<(), DisplayError> {
            Ok(())
        }

        fn fill_rect(&mut self, _: u16, _: u16, _: u16, _: u16) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    fn measurement_4k7() -> Measurement {
        let sample = 4095.0 * 4700.0 / (9850.0 + 4700.0);
        Measurement::from_sample(sample, &DividerConfig::default()).unwrap()
    }

    #[test]
    fn test_measurement_text() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());

        assert_eq!(screen.sample_text(), "1323");
        assert_eq!(screen.resistance_text(), "4700");
        assert_eq!(screen.band_names(), Some(["Yellow", "Violet", "Red"]));
    }

    #[test]
    fn test_render_layout() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());

        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();

        assert_eq!(backend.ops.first(), Some(&Op::Clear));
        assert_eq!(backend.ops.last(), Some(&Op::Flush));
        assert!(backend.ops.contains(&Op::Rect(3, 3, 122, 60)));
        assert!(backend.ops.contains(&Op::HLine(3, 21, 121, Ink::On)));
        assert!(backend.ops.contains(&Op::VLine(41, 4, 17, Ink::On)));
        assert!(backend.ops.contains(&Op::Text(9, 30, "Yellow".into())));
        assert!(backend.ops.contains(&Op::Text(9, 39, "Violet".into())));
        assert!(backend.ops.contains(&Op::Text(9, 48, "Red".into())));

        let stripes = backend
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Fill(..)))
            .count();
        assert_eq!(stripes, 3);

        assert_eq!(
            backend.texts(),
            vec!["ADC", "Resisten.", "1323", "4700", "Yellow", "Violet", "Red"]
        );
    }

    #[test]
    fn test_render_skips_when_clean() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());

        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();
        assert!(!screen.is_dirty());

        let mut second = RecordingBackend::default();
        screen.render(&mut second).unwrap();
        assert!(second.ops.is_empty());
    }

    #[test]
    fn test_open_circuit_has_no_bands() {
        let mut screen = MeasurementScreen::new();
        screen.set_fault(4095.0, EstimateError::OpenCircuit);

        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();

        assert_eq!(backend.texts(), vec!["ADC", "Resisten.", "4095", "OPEN"]);
        assert!(!backend.ops.iter().any(|op| matches!(op, Op::Fill(..))));
    }

    #[test]
    fn test_backend_error_keeps_dirty() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());

        assert_eq!(
            screen.render(&mut FailingBackend),
            Err(DisplayError::Communication)
        );
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_identical_measurement_stays_clean() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());
        screen.render(&mut RecordingBackend::default()).unwrap();

        screen.set_measurement(&measurement_4k7());
        assert!(!screen.is_dirty());

        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();
        assert!(backend.ops.is_empty());
    }

    #[test]
    fn test_changed_reading_marks_dirty() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());
        screen.render(&mut RecordingBackend::default()).unwrap();

        screen.set_fault(4095.0, EstimateError::OpenCircuit);
        assert!(screen.is_dirty());
        screen.render(&mut RecordingBackend::default()).unwrap();

        // Same fault again is not a change
        screen.set_fault(4095.0, EstimateError::OpenCircuit);
        assert!(!screen.is_dirty());

        screen.set_measurement(&measurement_4k7());
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_fault_labels() {
        let mut screen = MeasurementScreen::new();

        screen.set_fault(-1.0, EstimateError::InvalidSample);
        assert_eq!(screen.resistance_text(), "ERR");
        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();
        assert!(backend.texts().contains(&"ERR"));

        screen.set_fault(100.0, EstimateError::InvalidReference);
        assert_eq!(screen.resistance_text(), "ERR");

        screen.set_fault(4094.0, EstimateError::NonFinite);
        assert_eq!(screen.resistance_text(), "OVER");
        let mut backend = RecordingBackend::default();
        screen.render(&mut backend).unwrap();
        assert_eq!(backend.texts(), vec!["ADC", "Resisten.", "4094", "OVER"]);
        assert_eq!(screen.band_names(), None);
    }

    #[test]
    fn test_small_panel_rejected() {
        let mut screen = MeasurementScreen::new();
        screen.set_measurement(&measurement_4k7());

        let mut backend = RecordingBackend {
            ops: Vec::new(),
            size: (128, 32),
        };
        assert_eq!(
            screen.render(&mut backend),
            Err(DisplayError::InvalidCoordinates)
        );
        assert!(backend.ops.is_empty());
        assert!(screen.is_dirty());
    }
}
