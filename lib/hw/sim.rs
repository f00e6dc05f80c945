//! Simulated register file for running the control loop off target.

use embedded_hal::delay::DelayNs;

use crate::hw::{DisplayPort, InputPort};

/// Both buttons released, reset line released.
pub const IDLE: u32 = 0b111;

/// Replays recorded PIO samples, then keeps returning `idle`.
pub struct ScriptedInput<'a> {
    script: &'a [u32],
    position: usize,
    idle: u32,
}

impl<'a> ScriptedInput<'a> {
    pub fn new(script: &'a [u32]) -> Self {
        ScriptedInput::with_idle(script, IDLE)
    }

    pub fn with_idle(script: &'a [u32], idle: u32) -> Self {
        ScriptedInput {
            script,
            position: 0,
            idle,
        }
    }

    pub fn reads(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.script.len()
    }
}

impl InputPort for ScriptedInput<'_> {
    fn read(&mut self) -> u32 {
        let sample = self.script.get(self.position).copied().unwrap_or(self.idle);
        self.position += 1;
        sample
    }
}

pub struct RecordingDisplay {
    address: u32,
    last: Option<u32>,
    writes: usize,
}

impl RecordingDisplay {
    pub const fn new(address: u32) -> Self {
        RecordingDisplay {
            address,
            last: None,
            writes: 0,
        }
    }

    pub fn last(&self) -> Option<u32> {
        self.last
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplayPort for RecordingDisplay {
    fn write(&mut self, value: u32) {
        self.last = Some(value);
        self.writes += 1;
    }

    fn address(&self) -> u32 {
        self.address
    }
}

/// Returns immediately and only adds up the requested time.
#[derive(Debug, Default)]
pub struct NoDelay {
    elapsed_ns: u64,
}

impl NoDelay {
    pub const fn new() -> Self {
        NoDelay { elapsed_ns: 0 }
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += us as u64 * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += ms as u64 * 1_000_000;
    }
}
