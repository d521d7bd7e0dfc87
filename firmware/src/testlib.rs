use crate::system::inputs::Inputs;

/// Keep sampling until the left switch is flipped to either side.
pub fn sample_until_left_switch_is_flipped(inputs: &mut Inputs) {
    inputs.sample();
    let initial = inputs.switches.left.active();
    loop {
        inputs.sample();
        if inputs.switches.left.active() != initial {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
