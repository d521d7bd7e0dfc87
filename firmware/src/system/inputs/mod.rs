//! Abstraction of all the inputs feeding the plateau engine.
//!
//! All of these are grouped under a single abstraction to allow sharing
//! of both ADCs between the CV and pots.

mod cvs;
mod debounced;
mod pots;
mod switches;

use plateau_control::Snapshot;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::pac::{ADC1, ADC2};

pub use cvs::{CVs, Pins as CVPins};
pub use pots::{Pins as PotsPins, Pots};
pub use switches::{Pins as SwitchesPins, Switches};

pub struct Inputs {
    pub cv: CVs,
    pub pots: Pots,
    pub switches: Switches,
    adc_1: Adc<ADC1, Enabled>,
    adc_2: Adc<ADC2, Enabled>,
}

pub struct Config {
    pub cv: CVPins,
    pub pots: PotsPins,
    pub switches: SwitchesPins,
    pub adc_1: Adc<ADC1, Enabled>,
    pub adc_2: Adc<ADC2, Enabled>,
}

impl Inputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            cv: CVs::new(config.cv),
            pots: Pots::new(config.pots),
            switches: Switches::new(config.switches),
            adc_1: config.adc_1,
            adc_2: config.adc_2,
        }
    }

    pub fn sample(&mut self) {
        self.cv.sample(&mut self.adc_1);
        self.pots.sample(&mut self.adc_1, &mut self.adc_2);
        self.switches.sample();
    }

    /// Latest readings of all inputs, normalized for the engine.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            primary: self.cv.primary,
            position: self.pots.position,
            center: self.pots.center,
            left: self.pots.left,
            right: self.pots.right,
            left_exponential: self.switches.left.active(),
            right_exponential: self.switches.right.active(),
        }
    }
}
