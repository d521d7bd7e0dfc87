//! Partitioning of the input range into slopes and the plateau.

use crate::range::FULL_SCALE;

/// Boundaries of the plateau within the working range.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlateauBoundaries {
    pub center: f32,
    pub left_edge: f32,
    pub right_edge: f32,
}

/// Classification of the primary sample relative to the plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    #[default]
    Center,
    Left,
    Right,
}

impl Zone {
    /// Numeric code used in diagnostics.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Center => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }
}

impl PlateauBoundaries {
    /// Place the plateau based on the position control.
    ///
    /// The position is mapped into `[half_width, FULL_SCALE - half_width]`,
    /// so the plateau never leaves the working range. Half width is
    /// expected to be below half of the range.
    #[must_use]
    pub fn partition(position: f32, half_width: f32) -> Self {
        let fraction = position / FULL_SCALE;
        let center = half_width + fraction * (FULL_SCALE - 2.0 * half_width);
        Self {
            center,
            left_edge: (center - half_width).max(0.0),
            // Rounding of the sum may overshoot the range by an ulp.
            right_edge: (center + half_width).min(FULL_SCALE),
        }
    }

    #[must_use]
    pub fn classify(&self, primary: f32) -> Zone {
        if primary < self.left_edge {
            Zone::Left
        } else if primary > self.right_edge {
            Zone::Right
        } else {
            Zone::Center
        }
    }
}
