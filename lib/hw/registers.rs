use volatile_register::{RO, WO};

use crate::config::{PIO_BASE, SEVENSEG_BASE};
use crate::hw::{DisplayPort, InputPort};

#[repr(C)]
pub struct PioRegBlock {
    pub data: RO<u32>,
}

#[repr(C)]
pub struct SevenSegRegBlock {
    pub value: WO<u32>,
}

/// Button PIO, read-only data register.
pub struct Pio {
    regs: &'static PioRegBlock,
}

impl Pio {
    /// # Safety
    ///
    /// `base` must be the address of a PIO data register that stays valid
    /// for the rest of the program.
    pub unsafe fn new(base: usize) -> Self {
        Pio {
            regs: &*(base as *const PioRegBlock),
        }
    }

    /// # Safety
    ///
    /// Only one handle may exist, the platform address is assumed.
    pub unsafe fn take() -> Self {
        Pio::new(PIO_BASE)
    }
}

impl InputPort for Pio {
    fn read(&mut self) -> u32 {
        self.regs.data.read()
    }
}

/// Seven segment controller, write-only value register.
pub struct SevenSeg {
    regs: &'static SevenSegRegBlock,
}

impl SevenSeg {
    /// # Safety
    ///
    /// `base` must be the address of a seven segment value register that
    /// stays valid for the rest of the program.
    pub unsafe fn new(base: usize) -> Self {
        SevenSeg {
            regs: &*(base as *const SevenSegRegBlock),
        }
    }

    /// # Safety
    ///
    /// Only one handle may exist, the platform address is assumed.
    pub unsafe fn take() -> Self {
        SevenSeg::new(SEVENSEG_BASE)
    }
}

impl DisplayPort for SevenSeg {
    fn write(&mut self, value: u32) {
        unsafe { self.regs.value.write(value) }
    }

    fn address(&self) -> u32 {
        self.regs as *const SevenSegRegBlock as usize as u32
    }
}
