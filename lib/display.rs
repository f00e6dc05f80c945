use core::fmt;
use core::fmt::Write;
use heapless::String;

use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::hw::DisplayPort;

/// Four BCD nibbles as consumed by the seven segment controller, the ones
/// digit in the lowest nibble.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Packed(u16);

impl Packed {
    /// All segments lit, interpreted by the controller as its latch test.
    /// Never a digit encoding.
    pub const TEST_PATTERN: Packed = Packed(0xffff);
    pub const BLANK: Packed = Packed(0x0000);

    pub const fn from_bits(bits: u16) -> Self {
        Packed(bits)
    }

    /// Packs four digits given ones first. Every digit is truncated to its
    /// nibble.
    pub const fn from_digits(digits: [u8; 4]) -> Self {
        Packed(
            (digits[0] & 0xf) as u16
                | ((digits[1] & 0xf) as u16) << 4
                | ((digits[2] & 0xf) as u16) << 8
                | ((digits[3] & 0xf) as u16) << 12,
        )
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Nibbles ones first.
    pub const fn digits(self) -> [u8; 4] {
        [
            (self.0 & 0xf) as u8,
            (self.0 >> 4 & 0xf) as u8,
            (self.0 >> 8 & 0xf) as u8,
            (self.0 >> 12 & 0xf) as u8,
        ]
    }

    /// Reassembles the decimal value, `None` if any nibble is not a digit.
    pub fn decode(self) -> Option<u16> {
        self.digits()
            .iter()
            .rev()
            .try_fold(0u16, |acc, &digit| {
                if digit <= 9 {
                    Some(acc * 10 + digit as u16)
                } else {
                    None
                }
            })
    }
}

pub fn encode(counter: Counter) -> Packed {
    let value = counter.value();
    debug_assert!(value <= Counter::MAX);
    let packed = Packed::from_digits([
        (value % 10) as u8,
        (value / 10 % 10) as u8,
        (value / 100 % 10) as u8,
        (value / 1000 % 10) as u8,
    ]);
    debug_assert_ne!(packed, Packed::TEST_PATTERN);
    packed
}

/// Reported whenever the visible value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub value: u16,
    pub packed: Packed,
    pub address: u32,
}

pub type Line = String<64>;

impl DisplayUpdate {
    pub fn line(&self) -> Result<Line> {
        let mut buffer = String::new();
        write!(&mut buffer, "{}", self).map_err(|_| Error::BufferWrite)?;
        Ok(buffer)
    }
}

impl fmt::Display for DisplayUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "7-seg display = {} (0x{:04X} written to 0x{:08X})",
            self.value,
            self.packed.bits(),
            self.address
        )
    }
}

/// Keeps the controller in sync with the counter.
///
/// The register is rewritten on every call, the update is only reported
/// when the value differs from the last reported one.
pub struct Display<P>
where
    P: DisplayPort,
{
    port: P,
    last_reported: Option<Counter>,
}

impl<P> Display<P>
where
    P: DisplayPort,
{
    pub fn new(port: P) -> Self {
        Display {
            port,
            last_reported: None,
        }
    }

    pub fn show(&mut self, counter: Counter) -> Option<DisplayUpdate> {
        let packed = encode(counter);
        self.port.write(packed.bits() as u32);

        if self.last_reported == Some(counter) {
            return None;
        }
        self.last_reported = Some(counter);
        Some(DisplayUpdate {
            value: counter.value(),
            packed,
            address: self.port.address(),
        })
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}
