//! Process all input peripherals over time.

use plateau_dsp::range::to_working;
use plateau_dsp::resolver::{Levels, Modes};
use plateau_dsp::shaping::ShapingMode;

use super::pot::Pot;
use super::snapshot::Snapshot;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted
/// peripherals. The primary input is tracked as it is, the rest of the pots
/// get smoothened. Switches are not latched, they apply on the iteration
/// they were read in.
///
/// Note that despite all its attributes are public, they should be only read
/// from.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub primary: f32,
    pub position: Pot,
    pub center: Pot,
    pub left: Pot,
    pub right: Pot,
    pub modes: Modes,
}

impl Store {
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            primary: 0.0,
            position: Pot::new(alpha),
            center: Pot::new(alpha),
            left: Pot::new(alpha),
            right: Pot::new(alpha),
            modes: Modes::default(),
        }
    }

    pub fn update(&mut self, snapshot: Snapshot) {
        self.primary = to_working(snapshot.primary);
        self.position.update(snapshot.position);
        self.center.update(snapshot.center);
        self.left.update(snapshot.left);
        self.right.update(snapshot.right);
        self.modes = Modes {
            left: ShapingMode::from(snapshot.left_exponential),
            right: ShapingMode::from(snapshot.right_exponential),
        };
    }

    #[must_use]
    pub fn levels(&self) -> Levels {
        Levels {
            center: self.center.value(),
            left: self.left.value(),
            right: self.right.value(),
        }
    }
}
