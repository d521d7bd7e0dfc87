//! Resolve the output volume from the primary sample and plateau.
//!
//! The primary sample is classified into one of three zones. On the
//! plateau, the output follows the center pot. On the slopes, the position
//! within the zone is shaped, blended with the side pot and scaled by the
//! center pot.

use crate::curve::CurveTable;
use crate::plateau::{PlateauBoundaries, Zone};
use crate::range::{quantize, FULL_SCALE};
use crate::shaping::{ramp, shape, ShapingMode, Side, Strategy};

/// Filtered levels of the pots controlling the shape.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels {
    pub center: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modes {
    pub left: ShapingMode,
    pub right: ShapingMode,
}

/// Everything the resolver needs for a single iteration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Input {
    pub primary: f32,
    pub boundaries: PlateauBoundaries,
    pub levels: Levels,
    pub modes: Modes,
}

/// Output of the resolver together with its diagnostics.
///
/// Sub-volumes of zones other than the active one are always zero. The
/// sub-volume of the active zone equals the final volume, so it stays within
/// the output range even on an inverted slope.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    pub zone: Zone,
    pub ratio: f32,
    pub volume: u16,
    pub volume_center: u16,
    pub volume_left: u16,
    pub volume_right: u16,
}

#[must_use]
pub fn resolve(input: &Input, table: &CurveTable, strategy: Strategy) -> Resolution {
    let boundaries = &input.boundaries;
    let levels = &input.levels;
    let zone = boundaries.classify(input.primary);

    match zone {
        Zone::Left => {
            let ratio = left_ratio(input.primary, boundaries);
            let shaped = shape(ratio, input.modes.left, Side::Left, table);
            let volume = quantize(ramp(shaped, levels.left, levels.center, strategy));
            Resolution {
                zone,
                ratio,
                volume,
                volume_left: volume,
                ..Resolution::default()
            }
        }
        Zone::Right => {
            let ratio = right_ratio(input.primary, boundaries);
            let shaped = shape(ratio, input.modes.right, Side::Right, table);
            let volume = quantize(ramp(shaped, levels.right, levels.center, strategy));
            Resolution {
                zone,
                ratio,
                volume,
                volume_right: volume,
                ..Resolution::default()
            }
        }
        Zone::Center => {
            let volume = quantize(levels.center);
            Resolution {
                zone,
                ratio: center_ratio(input.primary, boundaries),
                volume,
                volume_center: volume,
                ..Resolution::default()
            }
        }
    }
}

// NOTE: Edges may collapse onto the ends of the range, in that case the
// ratio falls back to zero instead of dividing by zero.
fn left_ratio(primary: f32, boundaries: &PlateauBoundaries) -> f32 {
    let denominator = boundaries.left_edge;
    if denominator > 0.0 {
        (primary / denominator).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn right_ratio(primary: f32, boundaries: &PlateauBoundaries) -> f32 {
    let denominator = FULL_SCALE - boundaries.right_edge;
    if denominator > 0.0 {
        ((primary - boundaries.right_edge) / denominator).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn center_ratio(primary: f32, boundaries: &PlateauBoundaries) -> f32 {
    let denominator = boundaries.right_edge - boundaries.left_edge;
    if denominator > 0.0 {
        ((primary - boundaries.left_edge) / denominator).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
