mod registers;
pub mod sim;

pub use registers::{Pio, SevenSeg};

/// Source of raw button samples.
pub trait InputPort {
    /// Every call must observe the hardware again, never a cached value.
    fn read(&mut self) -> u32;
}

/// Sink for packed display values.
pub trait DisplayPort {
    fn write(&mut self, value: u32);
    /// Bus address of the register, only used for reporting.
    fn address(&self) -> u32;
}
