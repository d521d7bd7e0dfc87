#![no_main]
#![no_std]

use plateau_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use plateau_control::port::OutputSink;
    use plateau_control::{Config, Engine, RateMeter, Report};
    use plateau_firmware::system::inputs::Inputs;
    use plateau_firmware::system::outputs::Outputs;
    use plateau_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        inputs: Inputs,
        outputs: Outputs,
        engine: Engine,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.led_user;
        let inputs = system.inputs;
        let outputs = system.outputs;

        let engine = match Engine::try_new(Config::default()) {
            Ok(engine) => engine,
            Err(error) => defmt::panic!("Failed to start the engine: {}", error),
        };

        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {},
            Local {
                status_led,
                inputs,
                outputs,
                engine,
            },
            init::Monotonics(mono),
        )
    }

    #[idle(local = [inputs, outputs, engine])]
    fn idle(cx: idle::Context) -> ! {
        let inputs = cx.local.inputs;
        let outputs = cx.local.outputs;
        let engine = cx.local.engine;

        let mut rate = RateMeter::new(now_ms());

        loop {
            inputs.sample();
            let volume = engine.tick(inputs.snapshot());
            outputs.dac.write_u16(volume);

            rate.tick();
            if rate.update(now_ms()) {
                let line = Report::new(&engine.status(), rate.rate()).render();
                defmt::info!("{=str}", line.as_str());
            }
        }
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn now_ms() -> u32 {
        monotonics::now().ticks() as u32
    }
}
