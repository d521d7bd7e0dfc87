#![no_std]
#![no_main]

use plateau_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use plateau_firmware::system::inputs::Inputs;
    use plateau_firmware::system::System;
    use plateau_firmware::testlib::sample_until_left_switch_is_flipped;

    #[init]
    fn init() -> Inputs {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp).inputs
    }

    #[test]
    fn pots_move_in_expected_range(inputs: &mut Inputs) {
        macro_rules! assert_pot_is_up {
            ($name:expr, $pot:expr) => {
                defmt::info!("Turn {} all the way up, then flip the left switch", $name);
                sample_until_left_switch_is_flipped(inputs);
                defmt::assert!($pot > 0.99);
                defmt::info!("OK");
            };
        }

        defmt::info!("Turn all pots to their minimum value, then flip the left switch");
        sample_until_left_switch_is_flipped(inputs);
        defmt::assert!(
            inputs.pots.position < 0.01
                && inputs.pots.center < 0.01
                && inputs.pots.left < 0.01
                && inputs.pots.right < 0.01
        );
        defmt::info!("OK");

        assert_pot_is_up!("Position", inputs.pots.position);
        assert_pot_is_up!("Center", inputs.pots.center);
        assert_pot_is_up!("Left", inputs.pots.left);
        assert_pot_is_up!("Right", inputs.pots.right);
    }

    #[test]
    fn primary_cv_spans_whole_range(inputs: &mut Inputs) {
        defmt::info!("Connect -5 V to the primary CV, then flip the left switch");
        sample_until_left_switch_is_flipped(inputs);
        defmt::assert!(inputs.cv.primary < 0.01);
        defmt::info!("OK");

        defmt::info!("Connect +5 V to the primary CV, then flip the left switch");
        sample_until_left_switch_is_flipped(inputs);
        defmt::assert!(inputs.cv.primary > 0.99);
        defmt::info!("OK");
    }

    #[test]
    fn switches_reach_snapshot(inputs: &mut Inputs) {
        defmt::info!("Set the right switch up, then flip the left switch");
        sample_until_left_switch_is_flipped(inputs);
        defmt::assert!(inputs.snapshot().right_exponential);
        defmt::info!("OK");

        defmt::info!("Set the right switch down, then flip the left switch");
        sample_until_left_switch_is_flipped(inputs);
        defmt::assert!(!inputs.snapshot().right_exponential);
        defmt::info!("OK");
    }
}
