// Button PIO data register
pub const PIO_BASE: usize = 0x0003_0040;
// Seven segment controller, low 16 bits hold four BCD nibbles
pub const SEVENSEG_BASE: usize = 0x0003_0058;

// PIO lines, all active-low
pub const INCREMENT_MASK: u32 = 1 << 0;
pub const DECREMENT_MASK: u32 = 1 << 1;
// Wired on the board but nothing reacts to it yet
pub const RESET_MASK: u32 = 1 << 2;

// Four decimal digits
pub const COUNTER_MODULUS: u16 = 10_000;

// Core clock, mcycle ticks per second
pub const CORE_CLOCK_HZ: u32 = 50_000_000;

/// Compile-time tunables of the firmware.
///
/// None of the durations are correctness relevant, they only keep the
/// polling rate and the startup self-test observable for a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub poll_interval_us: u32,
    pub run_diagnostic: bool,
    pub diagnostic: DiagnosticTiming,
}

impl Config {
    pub const DEFAULT: Config = Config {
        poll_interval_us: 5_000,
        run_diagnostic: true,
        diagnostic: DiagnosticTiming::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticTiming {
    pub long_ms: u32,
    pub medium_ms: u32,
    pub short_ms: u32,
}

impl DiagnosticTiming {
    pub const DEFAULT: DiagnosticTiming = DiagnosticTiming {
        long_ms: 1_500,
        medium_ms: 400,
        short_ms: 150,
    };
}

impl Default for DiagnosticTiming {
    fn default() -> Self {
        DiagnosticTiming::DEFAULT
    }
}
