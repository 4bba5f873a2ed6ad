//! 3-band resistor color code
//!
//! Two significant digits followed by a power-of-ten multiplier, no
//! tolerance band. 4700 → "47" × 10^2 → Yellow, Violet, Red.

use crate::color::BandColor;

/// Three band digits, each 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorBands {
    digits: [u8; 3],
}

impl ColorBands {
    /// First significant digit
    pub fn first(&self) -> u8 {
        self.digits[0]
    }

    /// Second significant digit
    pub fn second(&self) -> u8 {
        self.digits[1]
    }

    /// Multiplier exponent
    pub fn multiplier(&self) -> u8 {
        self.digits[2]
    }

    /// All three digits in band order
    pub fn digits(&self) -> [u8; 3] {
        self.digits
    }

    /// Digits as ASCII characters ('0'-'9')
    pub fn as_chars(&self) -> [char; 3] {
        self.digits.map(|d| (b'0' + d) as char)
    }

    /// Band colors in order
    pub fn colors(&self) -> [BandColor; 3] {
        self.digits.map(BandColor::from_digit_clamped)
    }

    /// Ohms the bands encode
    pub fn ohms(&self) -> u64 {
        let significant = self.first() as u64 * 10 + self.second() as u64;
        significant * 10u64.pow(self.multiplier() as u32)
    }
}

/// Decode the color bands of a whole-ohm value
///
/// For values with two or more decimal digits the bands are the first
/// digit, the second digit and `digit_count - 2`. Single-digit values are
/// read as `0d`, so 5 becomes Black, Green, Black (05 × 10^0). Zero gives
/// three Black bands.
pub fn decode_color_bands(value: u32) -> ColorBands {
    if value < 10 {
        return ColorBands {
            digits: [0, value as u8, 0],
        };
    }

    let mut digit_count = 0u8;
    let mut rest = value;
    while rest > 0 {
        digit_count += 1;
        rest /= 10;
    }

    let leading = value / 10u32.pow(digit_count as u32 - 2);

    ColorBands {
        digits: [(leading / 10) as u8, (leading % 10) as u8, digit_count - 2],
    }
}
