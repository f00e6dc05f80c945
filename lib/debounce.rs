use crate::config::{DECREMENT_MASK, INCREMENT_MASK};

/// Press events detected in a single poll cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub increment: bool,
    pub decrement: bool,
}

impl Edges {
    pub const NONE: Edges = Edges {
        increment: false,
        decrement: false,
    };

    pub fn any(&self) -> bool {
        self.increment || self.decrement
    }
}

/// Two-sample debouncer with falling edge detection on the button lines.
///
/// A raw sample is accepted as the new stable state only when it equals the
/// sample of the previous cycle, bit for bit. Lines are active-low, so a
/// press is a 1 -> 0 transition between the stable state held over from the
/// previous cycle and the stable state accepted in the current one.
///
/// Both the previous raw sample and the stable state start at 0, i.e. every
/// line "pressed". A line therefore has to be seen released before it can
/// produce an edge, which keeps power-on from counting as a press.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    previous_raw: u32,
    stable: u32,
}

impl Debouncer {
    pub const fn new() -> Self {
        Debouncer {
            previous_raw: 0,
            stable: 0,
        }
    }

    pub fn stable(&self) -> u32 {
        self.stable
    }

    pub fn update(&mut self, raw: u32) -> Edges {
        let held = self.stable;
        if raw == self.previous_raw {
            self.stable = raw;
        }
        self.previous_raw = raw;

        let falling = held & !self.stable;
        Edges {
            increment: falling & INCREMENT_MASK != 0,
            decrement: falling & DECREMENT_MASK != 0,
        }
    }
}
