//! Display backend trait
//!
//! Defines the interface for different display types.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Pixel state on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ink {
    /// Pixel lit
    On,
    /// Pixel dark
    Off,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to displays.
/// Coordinates are in pixels from the top-left corner.
pub trait DisplayBackend {
    /// Clear the entire frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get pixel dimensions (width, height)
    fn dimensions(&self) -> (u16, u16);
}

/// Extended display backend for displays supporting graphics
pub trait GraphicsDisplayBackend: DisplayBackend {
    /// Draw a horizontal line
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError>;

    /// Draw a vertical line
    fn draw_vline(&mut self, x: u16, y: u16, length: u16, ink: Ink) -> Result<(), DisplayError>;

    /// Draw a rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;
}
