//! Startup configuration of the shaping engine.

use plateau_dsp::curve::{InvalidSteepness, MAX_STEEPNESS};
use plateau_dsp::range::FULL_SCALE;
use plateau_dsp::shaping::Strategy;

/// Tweakable constants of the module.
///
/// These are fixed for the whole runtime. Invalid values are rejected
/// before the control loop starts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Coefficient of the pot smoothening, in range (0.0, 1.0].
    pub alpha: f32,
    /// Width of the plateau as a fraction of the whole range, in [0.0, 1.0).
    pub plateau_width: f32,
    /// Steepness of the exponential slopes.
    pub steepness: f32,
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0.06,
            plateau_width: 0.2,
            steepness: 3.0,
            strategy: Strategy::Inverting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    Alpha(f32),
    PlateauWidth(f32),
    Steepness(f32),
}

impl From<InvalidSteepness> for ConfigError {
    fn from(other: InvalidSteepness) -> Self {
        Self::Steepness(other.0)
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns the first field that is out of its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::Alpha(self.alpha));
        }
        if !(self.plateau_width >= 0.0 && self.plateau_width < 1.0) {
            return Err(ConfigError::PlateauWidth(self.plateau_width));
        }
        if !(self.steepness > 0.0 && self.steepness <= MAX_STEEPNESS) {
            return Err(ConfigError::Steepness(self.steepness));
        }
        Ok(())
    }

    /// Half of the plateau in the working range.
    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.plateau_width * FULL_SCALE * 0.5
    }
}
