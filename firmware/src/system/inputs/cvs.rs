use nb::block;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

pub struct CVs {
    pub primary: f32,
    pins: Pins,
}

pub struct Pins {
    pub primary: PrimaryPin,
}

pub type PrimaryPin = gpio::gpioc::PC1<gpio::Analog>;

impl CVs {
    pub fn new(pins: Pins) -> Self {
        Self { primary: 0.0, pins }
    }

    pub fn sample(&mut self, adc_1: &mut Adc<ADC1, Enabled>) {
        adc_1.start_conversion(&mut self.pins.primary);
        let sample: u32 = block!(adc_1.read_sample()).unwrap_or_default();
        self.primary = transpose_adc(sample, adc_1.slope());
    }
}

fn transpose_adc(sample: u32, slope: u32) -> f32 {
    // NOTE: The input amplifier is inverting, -5 V reads as the slope.
    let float = (slope as f32 - sample as f32) / slope as f32;
    float.clamp(0.0, 1.0)
}
