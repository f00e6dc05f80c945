use embedded_hal::delay::DelayNs;

use crate::config::DiagnosticTiming;
use crate::display::Packed;
use crate::hw::DisplayPort;

// Digits 1 2 3 4 from digit 0 upward
const FIXED_PATTERN: Packed = Packed::from_digits([1, 2, 3, 4]);

/// Visible self-test of the seven segment controller.
///
/// The only place where the controller's test pattern is written. Leaves the
/// display blank.
pub fn run<P, D>(port: &mut P, delay: &mut D, timing: &DiagnosticTiming)
where
    P: DisplayPort,
    D: DelayNs,
{
    show(port, delay, FIXED_PATTERN, timing.long_ms);

    for &hold_ms in &[timing.medium_ms, timing.short_ms] {
        for digit in 0..10 {
            show(port, delay, Packed::from_digits([digit, 0, 0, 0]), hold_ms);
        }
    }

    show(port, delay, Packed::TEST_PATTERN, timing.long_ms);
    show(port, delay, Packed::BLANK, timing.short_ms);
}

fn show<P, D>(port: &mut P, delay: &mut D, packed: Packed, hold_ms: u32)
where
    P: DisplayPort,
    D: DelayNs,
{
    port.write(packed.bits() as u32);
    delay.delay_ms(hold_ms);
}
