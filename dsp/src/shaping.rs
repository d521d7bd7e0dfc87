//! Shaping of the slopes on both sides of the plateau.
//!
//! The position within a side zone is turned into a fraction through either
//! linear or exponential response, and that fraction then blends between the
//! level set by the side pot and the plateau.

use crate::curve::CurveTable;
use crate::range::FULL_SCALE;

/// Response curve of a slope, selected by a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapingMode {
    #[default]
    Linear,
    Exponential,
}

impl From<bool> for ShapingMode {
    fn from(exponential: bool) -> Self {
        if exponential {
            Self::Exponential
        } else {
            Self::Linear
        }
    }
}

/// Which side of the plateau is being shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// How side levels above the plateau level are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strategy {
    /// Always ramp from the side level up towards the plateau.
    Simple,
    /// When the side pot is above the center pot, the slope falls towards
    /// the plateau instead of rising to it.
    #[default]
    Inverting,
}

/// Shape the zone-relative ratio.
///
/// The ratio is 0.0 at the far end of the left zone and at the plateau edge
/// of the right zone. Left side follows the curve, right side mirrors it by
/// sampling at the complementary ratio, so both sides reach 1.0 on the
/// plateau edge.
#[must_use]
pub fn shape(ratio: f32, mode: ShapingMode, side: Side, table: &CurveTable) -> f32 {
    let ratio = ratio.clamp(0.0, 1.0);
    let position = match side {
        Side::Left => ratio,
        Side::Right => 1.0 - ratio,
    };
    match mode {
        ShapingMode::Linear => position,
        ShapingMode::Exponential => table.sample(position),
    }
}

/// Level of the slope at the shaped position, already scaled by the
/// center pot.
///
/// Shaped fraction of 1.0 always lands on the center level, so the slope
/// meets the plateau without a step. The far end sits at the side level
/// scaled by the center pot. With `Strategy::Inverting`, a side pot above
/// the center pot lifts the far end faster, until it reaches full scale
/// together with the side pot, turning the slope into one falling towards
/// the plateau. Both cases meet when the side and center pots are equal,
/// so turning the side pot never makes the output jump.
#[must_use]
pub fn ramp(shaped: f32, side_level: f32, center_level: f32, strategy: Strategy) -> f32 {
    let far = far_level(side_level, center_level, strategy);
    far + (center_level - far) * shaped
}

fn far_level(side_level: f32, center_level: f32, strategy: Strategy) -> f32 {
    let scale = center_level / FULL_SCALE;
    let side_is_bigger = strategy == Strategy::Inverting && side_level > center_level;
    if side_is_bigger {
        // NOTE: Offset and range swap roles. The offset is the far level the
        // rising slope would have with the side pot at the center level, the
        // range spans from there to full scale.
        let offset = center_level * scale;
        let range = (side_level - center_level) * (1.0 + scale);
        offset + range
    } else {
        side_level * scale
    }
}
