use plateau_control::port::OutputSink;

use crate::system::hal::dac::{Enabled, C1};
use crate::system::hal::pac::DAC;
use crate::system::hal::traits::DacOut;

pub type Channel = C1<DAC, Enabled>;

/// Volume output through the first channel of the internal 12-bit DAC.
pub struct Dac {
    channel: Channel,
}

impl Dac {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    pub fn set(&mut self, value: u16) {
        self.channel.set_value(to_12_bit(value));
    }
}

impl OutputSink for Dac {
    fn write_u16(&mut self, value: u16) {
        self.set(value);
    }
}

fn to_12_bit(value: u16) -> u16 {
    value >> 4
}
