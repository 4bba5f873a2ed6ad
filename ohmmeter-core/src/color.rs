//! Resistor color table
//!
//! Maps band digits 0-9 to their standard color names and to the RGB
//! values used on the LED matrix. Black and brown cannot really be shown
//! on an RGB LED; black is rendered off and brown as a dim warm white.

use smart_leds::RGB8;

/// Band color, discriminant equals the digit it encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BandColor {
    Black = 0,
    Brown = 1,
    Red = 2,
    Orange = 3,
    Yellow = 4,
    Green = 5,
    Blue = 6,
    Violet = 7,
    Gray = 8,
    White = 9,
}

impl BandColor {
    /// Colors in digit order
    pub const ALL: [BandColor; 10] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Gray,
        BandColor::White,
    ];

    /// Color for a digit, `None` above 9
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(digit as usize).copied()
    }

    /// Color for a digit already known to be 0-9
    ///
    /// Out-of-range digits map to black, the same as an unlit LED.
    pub(crate) fn from_digit_clamped(digit: u8) -> Self {
        Self::from_digit(digit).unwrap_or(BandColor::Black)
    }

    /// Digit this color encodes
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "Black",
            BandColor::Brown => "Brown",
            BandColor::Red => "Red",
            BandColor::Orange => "Orange",
            BandColor::Yellow => "Yellow",
            BandColor::Green => "Green",
            BandColor::Blue => "Blue",
            BandColor::Violet => "Violet",
            BandColor::Gray => "Gray",
            BandColor::White => "White",
        }
    }

    /// Full-brightness LED color
    pub fn rgb(self) -> RGB8 {
        let (r, g, b) = match self {
            BandColor::Black => (0, 0, 0),
            BandColor::Brown => (125, 95, 88),
            BandColor::Red => (255, 0, 0),
            BandColor::Orange => (255, 165, 0),
            BandColor::Yellow => (255, 255, 0),
            BandColor::Green => (0, 255, 0),
            BandColor::Blue => (0, 0, 255),
            BandColor::Violet => (200, 160, 238),
            BandColor::Gray => (169, 169, 169),
            BandColor::White => (255, 255, 255),
        };
        RGB8 { r, g, b }
    }
}

/// Color name for a band digit
///
/// Returns `None` for digits above 9.
pub fn color_name(digit: u8) -> Option<&'static str> {
    BandColor::from_digit(digit).map(BandColor::name)
}
