//! E24 preferred value search
//!
//! The E24 series has 24 mantissas per decade. Candidates are every
//! mantissa scaled by 10^0 through 10^6 (1 Ω to 9.1 MΩ).

/// E24 mantissas in tenths (10 = 1.0, 91 = 9.1)
pub const E24_TENTHS: [u16; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, //
    22, 24, 27, 30, 33, 36, 39, 43, //
    47, 51, 56, 62, 68, 75, 82, 91,
];

/// Highest decade searched (inclusive)
pub const MAX_DECADE: u8 = 6;

/// Number of (decade, mantissa) candidates
pub const CANDIDATE_COUNT: usize = E24_TENTHS.len() * (MAX_DECADE as usize + 1);

/// All candidates in tenths of an ohm, decade-major order
///
/// Search order is decade ascending, then mantissa index ascending.
pub const E24_CANDIDATES: [u32; CANDIDATE_COUNT] = build_candidates();

const fn build_candidates() -> [u32; CANDIDATE_COUNT] {
    let mut out = [0u32; CANDIDATE_COUNT];
    let mut scale = 1u32;
    let mut decade = 0;
    while decade <= MAX_DECADE as usize {
        let mut i = 0;
        while i < E24_TENTHS.len() {
            out[decade * E24_TENTHS.len() + i] = E24_TENTHS[i] as u32 * scale;
            i += 1;
        }
        scale *= 10;
        decade += 1;
    }
    out
}

/// Nearest E24 candidate for a resistance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct E24Match {
    /// Index into [`E24_TENTHS`]
    pub index: usize,
    /// Power of ten applied to the mantissa
    pub decade: u8,
    /// Candidate value in ohms (mantissa × 10^decade)
    pub candidate: f32,
    /// Candidate rounded to the nearest whole ohm
    pub value: u32,
}

impl E24Match {
    fn from_flat_index(flat: usize) -> Self {
        let index = flat % E24_TENTHS.len();
        let decade = (flat / E24_TENTHS.len()) as u8;
        let tenths = E24_CANDIDATES[flat];

        // Decades >= 1 are whole ohms; decade 0 rounds half away from zero
        let value = if decade == 0 {
            (tenths + 5) / 10
        } else {
            tenths / 10
        };

        Self {
            index,
            decade,
            candidate: tenths as f32 / 10.0,
            value,
        }
    }

    /// Mantissa in tenths (e.g. 47 for 4.7)
    pub fn mantissa_tenths(&self) -> u16 {
        E24_TENTHS[self.index]
    }
}

/// Find the E24 candidate closest to `resistance`
///
/// Exhaustive scan in decade-major order. Only a strictly smaller
/// difference replaces the current best, so on an exact tie the
/// first-enumerated candidate (lower decade, then lower index) wins.
///
/// Always returns a candidate; a NaN input yields the first one (1 Ω).
pub fn nearest_e24(resistance: f32) -> E24Match {
    let mut best = 0;
    let mut best_diff = libm::fabsf(resistance - candidate_ohms(0));

    for flat in 1..CANDIDATE_COUNT {
        let diff = libm::fabsf(resistance - candidate_ohms(flat));
        if diff < best_diff {
            best_diff = diff;
            best = flat;
        }
    }

    E24Match::from_flat_index(best)
}

fn candidate_ohms(flat: usize) -> f32 {
    E24_CANDIDATES[flat] as f32 / 10.0
}
