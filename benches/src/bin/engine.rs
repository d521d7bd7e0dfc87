//! Engine benchmark.
//!
//! Measuring how many DWT cycles a single iteration of the control loop
//! takes, excluding the ADC and DAC.

#![no_main]
#![no_std]

use core::hint::black_box;

use daisy::hal::prelude::_stm32h7xx_hal_rng_RngExt;

use plateau_benches as _;
use plateau_benches::{op_cyccnt_diff, random_buffer};

use plateau_control::{Config, Engine, Report, Snapshot};

#[cortex_m_rt::entry]
fn main() -> ! {
    const BUFFER_SIZE: usize = 100;

    defmt::println!("Engine benchmark");

    let mut cp = cortex_m::Peripherals::take().unwrap();
    let dp = daisy::pac::Peripherals::take().unwrap();
    let board = daisy::Board::take().unwrap();
    let ccdr = daisy::board_freeze_clocks!(board, dp);
    let mut randomizer = dp.RNG.constrain(ccdr.peripheral.RNG, &ccdr.clocks);

    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);

    let mut engine = Engine::try_new(Config::default()).unwrap();

    let primary: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);
    let position: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);
    let center: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);
    let left: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);
    let right: [f32; BUFFER_SIZE] = random_buffer(&mut randomizer);
    let mut snapshots = [Snapshot::default(); BUFFER_SIZE];
    for (i, snapshot) in snapshots.iter_mut().enumerate() {
        *snapshot = Snapshot {
            primary: primary[i],
            position: position[i],
            center: center[i],
            left: left[i],
            right: right[i],
            left_exponential: i % 2 == 0,
            right_exponential: i % 3 == 0,
        };
    }

    let cycles = op_cyccnt_diff!(cp, {
        for snapshot in &snapshots {
            black_box(black_box(&mut engine).tick(*snapshot));
        }
    });
    defmt::println!("Cycles per tick: {}", cycles / BUFFER_SIZE as u32);

    let cycles = op_cyccnt_diff!(cp, {
        for _ in 0..BUFFER_SIZE {
            let line = Report::new(&black_box(&engine).status(), 10_000).render();
            black_box(line);
        }
    });
    defmt::println!("Cycles per report: {}", cycles / BUFFER_SIZE as u32);

    plateau_benches::exit()
}
