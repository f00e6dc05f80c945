//! Property tests for the debounce, counter and encoder invariants.

use lib::counter::Counter;
use lib::debounce::Debouncer;
use lib::display::{encode, Packed};
use lib::hw::sim::{RecordingDisplay, ScriptedInput};
use lib::Controller;
use proptest::prelude::*;

fn counter_strategy() -> impl Strategy<Value = Counter> {
    (0u16..=Counter::MAX).prop_map(|v| Counter::from_value(v).unwrap())
}

// Mostly button lines, occasionally the whole register
fn sample_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        8 => 0u32..8,
        1 => any::<u32>(),
    ]
}

#[test]
fn encode_round_trips_whole_domain() {
    for value in 0..=Counter::MAX {
        let packed = encode(Counter::from_value(value).unwrap());
        let [d0, d1, d2, d3] = packed.digits();
        assert_eq!(
            d0 as u16 + 10 * d1 as u16 + 100 * d2 as u16 + 1000 * d3 as u16,
            value
        );
        assert_ne!(packed, Packed::TEST_PATTERN);
    }
}

proptest! {
    #[test]
    fn counter_stays_in_range(samples in prop::collection::vec(sample_strategy(), 0..400)) {
        let mut controller =
            Controller::new(ScriptedInput::new(&samples), RecordingDisplay::new(0));
        for _ in 0..samples.len() {
            controller.poll();
            prop_assert!(controller.counter().value() <= Counter::MAX);
            let shown = controller.display().last().unwrap();
            prop_assert!(shown <= 0xffff);
            prop_assert_eq!(
                Packed::from_bits(shown as u16).decode(),
                Some(controller.counter().value())
            );
        }
    }

    #[test]
    fn increment_then_decrement_is_identity(counter in counter_strategy()) {
        let mut c = counter;
        c.increment();
        prop_assert!(c.value() <= Counter::MAX);
        c.decrement();
        prop_assert_eq!(c, counter);
    }

    #[test]
    fn increment_matches_modulus(counter in counter_strategy()) {
        let mut c = counter;
        c.increment();
        prop_assert_eq!(c.value(), (counter.value() + 1) % 10_000);
    }

    #[test]
    fn decoded_matches_digits(counter in counter_strategy()) {
        let packed = encode(counter);
        let v = counter.value();
        prop_assert_eq!(packed.digits(), [
            (v % 10) as u8,
            (v / 10 % 10) as u8,
            (v / 100 % 10) as u8,
            (v / 1000 % 10) as u8,
        ]);
        prop_assert_eq!(packed.decode(), Some(v));
    }

    #[test]
    fn single_cycle_glitch_changes_nothing(
        prefix in prop::collection::vec(0u32..8, 0..20),
        glitch in 0u32..8,
    ) {
        // Settle on a stable level, then inject one differing sample
        let mut debouncer = Debouncer::new();
        for &raw in &prefix {
            debouncer.update(raw);
        }
        let level = prefix.last().copied().unwrap_or(0);
        debouncer.update(level);
        debouncer.update(level);
        let settled = debouncer.stable();
        prop_assume!(glitch != level);

        let edges = debouncer.update(glitch);
        prop_assert!(!edges.any());
        prop_assert_eq!(debouncer.stable(), settled);

        let edges = debouncer.update(level);
        prop_assert!(!edges.any());
        prop_assert_eq!(debouncer.stable(), settled);
    }

    #[test]
    fn no_edges_without_two_equal_samples(samples in prop::collection::vec(0u32..8, 1..50)) {
        let mut debouncer = Debouncer::new();
        let mut previous = None;
        for &raw in &samples {
            let before = debouncer.stable();
            let edges = debouncer.update(raw);
            if previous != Some(raw) {
                prop_assert_eq!(debouncer.stable(), before);
                prop_assert!(!edges.any());
            }
            previous = Some(raw);
        }
    }
}
