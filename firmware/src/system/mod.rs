pub mod inputs;
pub mod outputs;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use systick_monotonic::Systick;

use inputs::{CVPins, Config as InputsConfig, Inputs, PotsPins, SwitchesPins};
use outputs::{Config as OutputsConfig, Outputs};

pub struct System {
    pub mono: Systick<1000>,
    pub led_user: LedUser,
    pub inputs: Inputs,
    pub outputs: Outputs,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let (adc_1, adc_2) = {
            let (mut adc_1, mut adc_2) = hal::adc::adc12(
                dp.ADC1,
                dp.ADC2,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc_1.set_resolution(Resolution::SIXTEENBIT);
            adc_1.set_sample_time(AdcSampleTime::T_16);
            adc_2.set_resolution(Resolution::SIXTEENBIT);
            adc_2.set_sample_time(AdcSampleTime::T_16);
            (adc_1.enable(), adc_2.enable())
        };

        let dac = dp
            .DAC
            .dac(pins.GPIO.PIN_C10.into_analog(), ccdr.peripheral.DAC12)
            .calibrate_buffered(&mut delay)
            .enable();

        let mono = Systick::new(cp.SYST, 480_000_000);
        let led_user = daisy::board_split_leds!(pins).USER;
        let inputs = Inputs::new(InputsConfig {
            cv: CVPins {
                primary: pins.GPIO.PIN_C6.into_analog(),
            },
            pots: PotsPins {
                position: pins.GPIO.PIN_C4.into_analog(),
                center: pins.GPIO.PIN_C2.into_analog(),
                left: pins.GPIO.PIN_C3.into_analog(),
                right: pins.GPIO.PIN_C7.into_analog(),
            },
            switches: SwitchesPins {
                left: pins.GPIO.PIN_B7.into_pull_up_input(),
                right: pins.GPIO.PIN_B8.into_pull_up_input(),
            },
            adc_1,
            adc_2,
        });
        let outputs = Outputs::new(OutputsConfig { dac });

        Self {
            mono,
            led_user,
            inputs,
            outputs,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
