use embedded_hal::delay::DelayNs;

use crate::counter::Counter;
use crate::debounce::{Debouncer, Edges};
use crate::display::{Display, DisplayUpdate};
use crate::hw::{DisplayPort, InputPort};

/// One poll cycle: sample, debounce, count, render.
pub struct Controller<I, D>
where
    I: InputPort,
    D: DisplayPort,
{
    input: I,
    display: Display<D>,
    debouncer: Debouncer,
    counter: Counter,
}

impl<I, D> Controller<I, D>
where
    I: InputPort,
    D: DisplayPort,
{
    pub fn new(input: I, display: D) -> Self {
        Controller {
            input,
            display: Display::new(display),
            debouncer: Debouncer::new(),
            counter: Counter::new(),
        }
    }

    /// Runs a single cycle. Returns an update exactly when the displayed
    /// value has to be logged.
    pub fn poll(&mut self) -> Option<DisplayUpdate> {
        let edges = self.sample();
        self.counter.apply(edges);
        self.display.show(self.counter)
    }

    /// `poll` followed by the pacing delay.
    pub fn step<T: DelayNs>(&mut self, delay: &mut T, interval_us: u32) -> Option<DisplayUpdate> {
        let update = self.poll();
        delay.delay_us(interval_us);
        update
    }

    pub fn counter(&self) -> Counter {
        self.counter
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn display(&self) -> &D {
        self.display.port()
    }

    fn sample(&mut self) -> Edges {
        let raw = self.input.read();
        self.debouncer.update(raw)
    }
}
