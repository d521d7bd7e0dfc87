use crate::system::hal::gpio;

use super::debounced::Debounced;

/// The two exponential mode switches, pulled up and active low.
pub struct Switches {
    pub left: Debounced<4>,
    pub right: Debounced<4>,
    pins: Pins,
}

pub struct Pins {
    pub left: LeftPin,
    pub right: RightPin,
}

pub type LeftPin = gpio::gpiob::PB8<gpio::Input>;
pub type RightPin = gpio::gpiob::PB9<gpio::Input>;

impl Switches {
    pub fn new(pins: Pins) -> Self {
        Self {
            left: Debounced::new(),
            right: Debounced::new(),
            pins,
        }
    }

    pub fn sample(&mut self) {
        self.left.update(self.pins.left.is_low());
        self.right.update(self.pins.right.is_low());
    }
}
