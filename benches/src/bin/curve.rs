//! Curve table benchmark.
//!
//! Measuring how many DWT cycles it takes to sample the exponential curve
//! through the lookup table, compared to evaluating it directly.

#![no_main]
#![no_std]

use core::hint::black_box;

use daisy::hal::prelude::_stm32h7xx_hal_rng_RngExt;

use plateau_benches as _;
use plateau_benches::{op_cyccnt_diff, random_buffer};

use plateau_dsp::curve::{evaluate, CurveTable};

#[cortex_m_rt::entry]
fn main() -> ! {
    const BUFFER_SIZE: usize = 300;

    defmt::println!("Curve benchmark");

    let mut cp = cortex_m::Peripherals::take().unwrap();
    let dp = daisy::pac::Peripherals::take().unwrap();
    let board = daisy::Board::take().unwrap();
    let ccdr = daisy::board_freeze_clocks!(board, dp);
    let mut randomizer = dp.RNG.constrain(ccdr.peripheral.RNG, &ccdr.clocks);

    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);

    let table = CurveTable::try_new(3.0).unwrap();
    let xs: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);

    let cycles = op_cyccnt_diff!(cp, {
        for x in &xs {
            black_box(black_box(&table).sample(*x));
        }
    });
    defmt::println!("Cycles per table sample: {}", cycles / BUFFER_SIZE as u32);

    let cycles = op_cyccnt_diff!(cp, {
        for x in &xs {
            black_box(evaluate(3.0, *x));
        }
    });
    defmt::println!("Cycles per direct evaluation: {}", cycles / BUFFER_SIZE as u32);

    plateau_benches::exit()
}
