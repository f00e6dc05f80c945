use crate::config::COUNTER_MODULUS;
use crate::debounce::Edges;

/// Bounded decimal counter, always in `0..=9999`.
///
/// Both directions wrap: incrementing 9999 gives 0 and decrementing 0
/// gives 9999.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter(u16);

impl Counter {
    pub const MAX: u16 = COUNTER_MODULUS - 1;

    pub const fn new() -> Self {
        Counter(0)
    }

    /// Returns `None` for values outside of the counter range.
    pub const fn from_value(value: u16) -> Option<Self> {
        if value <= Self::MAX {
            Some(Counter(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1) % COUNTER_MODULUS;
    }

    pub fn decrement(&mut self) {
        self.0 = if self.0 == 0 { Self::MAX } else { self.0 - 1 };
    }

    /// Applies the edges of one poll cycle, increment first.
    pub fn apply(&mut self, edges: Edges) {
        if edges.increment {
            self.increment();
        }
        if edges.decrement {
            self.decrement();
        }
    }
}
