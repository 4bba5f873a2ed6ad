//! ADC sample averaging
//!
//! A single 12-bit conversion is noisy; the meter averages a window of
//! readings (500 by default) before estimating the resistance.

/// Running sum over a window of raw ADC readings
#[derive(Debug, Clone, Copy, Default)]
pub struct Averager {
    sum: u32,
    count: u32,
}

impl Averager {
    /// Create an empty averager
    pub const fn new() -> Self {
        Self { sum: 0, count: 0 }
    }

    /// Add one raw reading
    pub fn push(&mut self, raw: u16) {
        self.sum = self.sum.saturating_add(raw as u32);
        self.count += 1;
    }

    /// Arithmetic mean, `None` if nothing was pushed
    pub fn mean(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum as f32 / self.count as f32)
    }
}
