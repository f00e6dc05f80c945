#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use lib::config::Config;
use lib::diagnostic;
use lib::Controller;

#[cfg(target_os = "none")]
#[riscv_rt::entry]
fn main() -> ! {
    use lib::config::CORE_CLOCK_HZ;
    use lib::hw::{Pio, SevenSeg};
    use riscv::delay::McycleDelay;

    let config = Config::DEFAULT;
    let mut delay = McycleDelay::new(CORE_CLOCK_HZ);
    // Sole owner of both peripherals from here on
    let (pio, mut sevenseg) = unsafe { (Pio::take(), SevenSeg::take()) };

    defmt::info!("Counter app start (0-9999)");

    if config.run_diagnostic {
        defmt::info!("Running diagnostic test (visible)...");
        diagnostic::run(&mut sevenseg, &mut delay, &config.diagnostic);
        defmt::info!("Diagnostic complete. Entering normal mode.");
    }

    let mut controller = Controller::new(pio, sevenseg);
    loop {
        if let Some(update) = controller.step(&mut delay, config.poll_interval_us) {
            match update.line() {
                Ok(line) => defmt::info!("{=str}", line.as_str()),
                Err(_) => defmt::warn!("display = {=u16}, log line dropped", update.value),
            }
        }
    }
}

// Off target the same loop runs against the simulated register file
#[cfg(not(target_os = "none"))]
fn main() {
    use lib::hw::sim::{NoDelay, RecordingDisplay, ScriptedInput, IDLE};

    const INC: u32 = 0b110;
    const DEC: u32 = 0b101;
    const SCRIPT: &[u32] = &[
        IDLE, IDLE, INC, INC, IDLE, IDLE, INC, INC, IDLE, IDLE, // two presses
        INC, IDLE, IDLE, // glitch
        DEC, DEC, IDLE, IDLE, DEC, DEC, IDLE, IDLE, DEC, DEC, IDLE, IDLE, // three presses
    ];

    let config = Config::DEFAULT;
    let mut delay = NoDelay::new();
    let mut sevenseg = RecordingDisplay::new(lib::config::SEVENSEG_BASE as u32);

    println!("Counter app start (0-9999)");

    if config.run_diagnostic {
        println!("Running diagnostic test (visible)...");
        diagnostic::run(&mut sevenseg, &mut delay, &config.diagnostic);
        println!("Diagnostic complete. Entering normal mode.");
    }

    let mut controller = Controller::new(ScriptedInput::new(SCRIPT), sevenseg);
    while !controller.input().is_exhausted() {
        if let Some(update) = controller.step(&mut delay, config.poll_interval_us) {
            println!("{}", update);
        }
    }
}
