//! 5x5 LED matrix layout
//!
//! The WS2812 strip is wired in a serpentine: even rows run left to right,
//! odd rows right to left, and the strip starts at the far corner of the
//! grid, so (0, 0) is the last LED on the strip.
//!
//! Band layout (column = band, rows 1-3):
//!
//! ```text
//!   x: 0 1 2 3 4
//! y=0  . . . . .
//! y=1  . A B C .
//! y=2  S A B C S
//! y=3  . A B C .
//! y=4  . . . . .
//! ```
//!
//! A/B/C are the three bands, S are dim spacer "leads".

use smart_leds::RGB8;

use crate::estimator::ColorBands;

/// Matrix width and height
pub const MATRIX_SIZE: usize = 5;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Color of the two lead pixels either side of the bands
pub const SPACER_COLOR: RGB8 = RGB8 { r: 30, g: 30, b: 30 };

/// Default global brightness in percent
pub const DEFAULT_BRIGHTNESS_PCT: u8 = 5;

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Strip index of a grid coordinate
///
/// Returns `None` outside the 5x5 grid.
pub fn led_index(x: usize, y: usize) -> Option<usize> {
    if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
        return None;
    }

    let column = if y % 2 == 0 { x } else { MATRIX_SIZE - 1 - x };
    Some(LED_COUNT - 1 - (y * MATRIX_SIZE + column))
}

/// One frame of the LED matrix in strip order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFrame {
    pixels: [RGB8; LED_COUNT],
}

impl Default for MatrixFrame {
    fn default() -> Self {
        Self::blank()
    }
}

impl MatrixFrame {
    /// All LEDs off
    pub const fn blank() -> Self {
        Self {
            pixels: [OFF; LED_COUNT],
        }
    }

    /// Frame showing three color bands and the lead spacers
    pub fn from_bands(bands: &ColorBands) -> Self {
        let mut frame = Self::blank();

        for (band, color) in bands.colors().iter().enumerate() {
            for y in 1..=3 {
                frame.set(band + 1, y, color.rgb());
            }
        }

        frame.set(0, 2, SPACER_COLOR);
        frame.set(MATRIX_SIZE - 1, 2, SPACER_COLOR);
        frame
    }

    /// Set a pixel by grid coordinate, ignoring out-of-range coordinates
    pub fn set(&mut self, x: usize, y: usize, color: RGB8) {
        if let Some(index) = led_index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Set a pixel by strip index, ignoring indices past the end
    pub fn set_index(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Pixel at a grid coordinate
    pub fn get(&self, x: usize, y: usize) -> Option<RGB8> {
        led_index(x, y).map(|index| self.pixels[index])
    }

    /// Pixels in strip order
    pub fn pixels(&self) -> &[RGB8; LED_COUNT] {
        &self.pixels
    }

    /// Pixels scaled to a brightness percentage (0-100)
    ///
    /// Channels are truncated, so 255 at 5% becomes 12.
    pub fn dimmed(&self, brightness_pct: u8) -> [RGB8; LED_COUNT] {
        let pct = brightness_pct.min(100);
        self.pixels.map(|p| dim(p, pct))
    }
}

fn dim(color: RGB8, pct: u8) -> RGB8 {
    let scale = |c: u8| (c as u16 * pct as u16 / 100) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BandColor;
    use crate::estimator::decode_color_bands;

    #[test]
    fn test_serpentine_corners() {
        assert_eq!(led_index(0, 0), Some(24));
        assert_eq!(led_index(4, 0), Some(20));
        // Odd row runs the other way
        assert_eq!(led_index(0, 1), Some(15));
        assert_eq!(led_index(4, 1), Some(19));
        assert_eq!(led_index(4, 4), Some(0));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(led_index(5, 0), None);
        assert_eq!(led_index(0, 5), None);
    }

    #[test]
    fn test_mapping_is_bijective() {
        let mut seen = [false; LED_COUNT];
        for y in 0..MATRIX_SIZE {
            for x in 0..MATRIX_SIZE {
                let index = led_index(x, y).unwrap();
                assert!(!seen[index], "index {} mapped twice", index);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_band_frame_layout() {
        let frame = MatrixFrame::from_bands(&decode_color_bands(4700));

        for y in 1..=3 {
            assert_eq!(frame.get(1, y), Some(BandColor::Yellow.rgb()));
            assert_eq!(frame.get(2, y), Some(BandColor::Violet.rgb()));
            assert_eq!(frame.get(3, y), Some(BandColor::Red.rgb()));
        }

        assert_eq!(frame.get(0, 2), Some(SPACER_COLOR));
        assert_eq!(frame.get(4, 2), Some(SPACER_COLOR));

        // Corners and the top/bottom rows stay off
        assert_eq!(frame.get(0, 0), Some(OFF));
        assert_eq!(frame.get(2, 0), Some(OFF));
        assert_eq!(frame.get(2, 4), Some(OFF));
        assert_eq!(frame.get(0, 1), Some(OFF));
    }

    #[test]
    fn test_lit_pixel_count() {
        // 4700 has no black bands: 9 band pixels + 2 spacers
        let frame = MatrixFrame::from_bands(&decode_color_bands(4700));
        let lit = frame.pixels().iter().filter(|p| **p != OFF).count();
        assert_eq!(lit, 11);
    }

    #[test]
    fn test_dimmed() {
        let frame = MatrixFrame::from_bands(&decode_color_bands(4700));
        let dimmed = frame.dimmed(DEFAULT_BRIGHTNESS_PCT);

        let yellow = dimmed[led_index(1, 1).unwrap()];
        assert_eq!(yellow, RGB8 { r: 12, g: 12, b: 0 });

        let spacer = dimmed[led_index(0, 2).unwrap()];
        assert_eq!(spacer, RGB8 { r: 1, g: 1, b: 1 });

        // Full brightness is unchanged, overshoot clamps to 100%
        assert_eq!(&frame.dimmed(100), frame.pixels());
        assert_eq!(&frame.dimmed(200), frame.pixels());
    }

    #[test]
    fn test_set_index() {
        let mut frame = MatrixFrame::blank();
        frame.set_index(24, SPACER_COLOR);
        frame.set_index(25, SPACER_COLOR);
        assert_eq!(frame.get(0, 0), Some(SPACER_COLOR));
    }

    #[test]
    fn test_blank() {
        assert!(MatrixFrame::blank().pixels().iter().all(|p| *p == OFF));
    }
}
