//! Pot abstraction smoothening its readings.

use plateau_dsp::ewma::SmoothingFilter;
use plateau_dsp::range::to_working;

/// Abstraction of a potentiometer.
///
/// Keeps both the last raw reading and its smoothened value, both in the
/// working range.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pot {
    raw: f32,
    filter: SmoothingFilter,
}

impl Pot {
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            raw: 0.0,
            filter: SmoothingFilter::new(alpha),
        }
    }

    pub fn update(&mut self, normalized: f32) {
        self.raw = to_working(normalized);
        self.filter.tick(self.raw);
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.filter.value()
    }

    #[must_use]
    pub fn value_raw(&self) -> f32 {
        self.raw
    }
}
