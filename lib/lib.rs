#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(target_os = "none")]
use defmt_rtt as _; // global logger
#[cfg(target_os = "none")]
use panic_halt as _;

pub mod config;
pub mod control;
pub mod counter;
pub mod debounce;
pub mod diagnostic;
pub mod display;
pub mod error;
pub mod hw;

pub use config::Config;
pub use control::Controller;
pub use counter::Counter;
pub use display::{encode, DisplayUpdate, Packed};

#[cfg(target_os = "none")]
static COUNT: AtomicUsize = AtomicUsize::new(0);
#[cfg(target_os = "none")]
defmt::timestamp!("{=usize}", {
    let n = COUNT.load(Ordering::Relaxed);
    COUNT.store(n + 1, Ordering::Relaxed);
    n
});
