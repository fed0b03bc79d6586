//! Edge detection for hardware-debounced buttons
//!
//! Tracks a single digital input and reports each transition exactly
//! once: either as a latched flag consumed later in the main loop, or by
//! invoking a callback at the moment `poll` observes the transition.

use detent_hal::InputPin;

/// A transition direction of a logical signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Logical false -> true
    Rising,
    /// Logical true -> false
    Falling,
}

/// Polled edge detector for a single digital input
///
/// The same primitive serves both styles of consumer: poll-driven code
/// reads latched edges via [`take_rising`](EdgeDetector::take_rising) /
/// [`take_falling`](EdgeDetector::take_falling), while event-driven code
/// attaches a callback per direction and gets called synchronously from
/// [`poll`](EdgeDetector::poll). A direction with an attached callback
/// never latches.
pub struct EdgeDetector<P> {
    pin: P,
    /// Last observed logical level (after inversion)
    state: bool,
    /// Latched, unconsumed transition
    pending: Option<Edge>,
    /// If true, logical level = NOT raw level
    inverted: bool,
    on_rising: Option<fn()>,
    on_falling: Option<fn()>,
}

impl<P: InputPin> EdgeDetector<P> {
    /// Create a new edge detector
    ///
    /// Samples the pin immediately, so the first `poll` only reports an
    /// edge if the level actually changed after construction.
    ///
    /// # Arguments
    /// - `pin`: The input to watch
    /// - `inverted`: If true, the logical level is the complement of the
    ///   raw level (active-low wiring)
    pub fn new(pin: P, inverted: bool) -> Self {
        let state = pin.is_high() != inverted;
        Self {
            pin,
            state,
            pending: None,
            inverted,
            on_rising: None,
            on_falling: None,
        }
    }

    /// Create a detector for an active-high input
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a detector for an active-low input
    ///
    /// The usual wiring for a push button on a pull-up pin: the raw level
    /// idles high and the logical level is true while the button is held.
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Attach a callback for one edge direction
    ///
    /// While a callback is attached, transitions in that direction invoke
    /// it from within `poll` instead of latching, so `take_rising` /
    /// `take_falling` never report them. At most one callback per
    /// direction; attaching again replaces the previous one. If `poll`
    /// runs in interrupt context the callback inherits its constraints:
    /// keep it short and non-blocking.
    pub fn attach(&mut self, edge: Edge, f: fn()) {
        match edge {
            Edge::Rising => self.on_rising = Some(f),
            Edge::Falling => self.on_falling = Some(f),
        }
    }

    /// Sample the input and detect a transition
    ///
    /// Call at a rate faster than the shortest pulse the input can
    /// produce. Each detected transition results in exactly one callback
    /// invocation or one latch update, never both. An unconsumed latched
    /// edge is overwritten by the next transition.
    pub fn poll(&mut self) {
        let reading = self.pin.is_high() != self.inverted;
        if reading == self.state {
            return;
        }
        self.state = reading;
        if reading {
            match self.on_rising {
                Some(f) => f(),
                None => self.pending = Some(Edge::Rising),
            }
        } else {
            match self.on_falling {
                Some(f) => f(),
                None => self.pending = Some(Edge::Falling),
            }
        }
    }

    /// Consume a latched rising edge
    ///
    /// Returns true at most once per detected transition; a successful
    /// call clears the latch, so a second call without an intervening
    /// transition returns false.
    pub fn take_rising(&mut self) -> bool {
        if self.pending == Some(Edge::Rising) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Consume a latched falling edge
    pub fn take_falling(&mut self) -> bool {
        if self.pending == Some(Edge::Falling) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Current logical level, without side effects
    pub fn level(&self) -> bool {
        self.state
    }

    /// Re-synchronize to the current raw level and drop any latched edge
    ///
    /// Used to suppress spurious edges after (re)initialization. Attached
    /// callbacks are kept.
    pub fn reset(&mut self) {
        self.state = self.pin.is_high() != self.inverted;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use proptest::prelude::*;

    /// Mock input pin reading a level the test mutates externally
    struct MockPin<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    #[test]
    fn test_latch_and_consume() {
        let level = Cell::new(false);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });

        // No transition, nothing latched
        det.poll();
        assert!(!det.take_rising());
        assert!(!det.take_falling());

        // Rising transition
        level.set(true);
        det.poll();
        assert!(det.take_rising());
        // Consumed: a second call reports nothing
        assert!(!det.take_rising());

        // Falling transition
        level.set(false);
        det.poll();
        assert!(!det.take_rising());
        assert!(det.take_falling());
        assert!(!det.take_falling());
    }

    #[test]
    fn test_inverted_sequence() {
        // Raw [H, H, L, L, H] reads as logical [L, L, H, H, L]
        let level = Cell::new(true);
        let mut det = EdgeDetector::new_active_low(MockPin { level: &level });

        let raw = [true, true, false, false, true];
        let mut rising_at = None;
        let mut falling_at = None;
        for (i, &r) in raw.iter().enumerate() {
            level.set(r);
            det.poll();
            if det.take_rising() {
                rising_at = Some(i);
            }
            if det.take_falling() {
                falling_at = Some(i);
            }
        }

        assert_eq!(rising_at, Some(2));
        assert_eq!(falling_at, Some(4));
        assert!(!det.level());
    }

    #[test]
    fn test_unconsumed_latch_is_overwritten() {
        let level = Cell::new(false);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });

        level.set(true);
        det.poll();
        level.set(false);
        det.poll();

        // The latch holds the most recent unconsumed edge only
        assert!(!det.take_rising());
        assert!(det.take_falling());
    }

    #[test]
    fn test_unchanged_level_is_noop() {
        let level = Cell::new(true);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });

        for _ in 0..10 {
            det.poll();
        }
        assert!(!det.take_rising());
        assert!(!det.take_falling());
        assert!(det.level());
    }

    static RISING_CALLS: AtomicUsize = AtomicUsize::new(0);
    fn count_rising() {
        RISING_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_callback_suppresses_latch() {
        let level = Cell::new(false);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });
        det.attach(Edge::Rising, count_rising);

        level.set(true);
        det.poll();
        assert_eq!(RISING_CALLS.load(Ordering::SeqCst), 1);
        // Callback fired in place of latching
        assert!(!det.take_rising());

        // Falling direction has no callback and still latches
        level.set(false);
        det.poll();
        assert_eq!(RISING_CALLS.load(Ordering::SeqCst), 1);
        assert!(det.take_falling());
    }

    static FIRST_CALLS: AtomicUsize = AtomicUsize::new(0);
    static SECOND_CALLS: AtomicUsize = AtomicUsize::new(0);
    fn count_first() {
        FIRST_CALLS.fetch_add(1, Ordering::SeqCst);
    }
    fn count_second() {
        SECOND_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_attach_last_wins() {
        let level = Cell::new(true);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });
        det.attach(Edge::Falling, count_first);
        det.attach(Edge::Falling, count_second);

        level.set(false);
        det.poll();
        assert_eq!(FIRST_CALLS.load(Ordering::SeqCst), 0);
        assert_eq!(SECOND_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reset_clears_latch_and_resyncs() {
        let level = Cell::new(false);
        let mut det = EdgeDetector::new_active_high(MockPin { level: &level });

        level.set(true);
        det.poll();
        // Latched but never consumed
        det.reset();
        assert!(!det.take_rising());
        assert!(det.level());

        // Unchanged raw level: no spurious edge on the next poll
        det.poll();
        assert!(!det.take_rising());
        assert!(!det.take_falling());
    }

    proptest! {
        /// Latch counts match the logical signal's transition counts for
        /// arbitrary level sequences, provided every edge is consumed.
        #[test]
        fn latch_counts_match_transitions(
            initial in any::<bool>(),
            levels in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let cell = Cell::new(initial);
            let mut det = EdgeDetector::new_active_high(MockPin { level: &cell });

            let mut rising = 0;
            let mut falling = 0;
            let mut expected_rising = 0;
            let mut expected_falling = 0;
            let mut prev = initial;
            for &lvl in &levels {
                cell.set(lvl);
                det.poll();
                if det.take_rising() {
                    rising += 1;
                }
                if det.take_falling() {
                    falling += 1;
                }
                if lvl && !prev {
                    expected_rising += 1;
                }
                if !lvl && prev {
                    expected_falling += 1;
                }
                prev = lvl;
            }

            prop_assert_eq!(rising, expected_rising);
            prop_assert_eq!(falling, expected_falling);
            prop_assert_eq!(det.level(), prev);
        }
    }
}
