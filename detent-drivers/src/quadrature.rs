//! Quadrature decoding for 2-bit gray-code rotary encoders
//!
//! Steps accumulate on one edge of phase A only, so a common
//! 2-pulse-per-detent encoder registers exactly one step per detent.
//! Phase B's level at that instant gives the direction.

use detent_hal::InputPin;

/// Polled decoder for a two-phase gray-code rotary encoder
///
/// Accumulates signed steps between calls to
/// [`take_steps`](QuadratureDecoder::take_steps). A caller polling slower
/// than the mechanical detent rate still sees the correct net
/// displacement, since steps are summed rather than reported one by one.
pub struct QuadratureDecoder<A, B> {
    pin_a: A,
    pin_b: B,
    /// Last observed raw level of phase A
    last_a: bool,
    steps: i32,
    /// Swap the sign convention (which phase leads is a wiring property)
    reversed: bool,
}

impl<A: InputPin, B: InputPin> QuadratureDecoder<A, B> {
    /// Create a new decoder
    ///
    /// Samples phase A immediately and starts with an empty accumulator.
    /// Under this convention, phase B high on phase A's rising edge
    /// counts +1; use [`new_reversed`](Self::new_reversed) if the wiring
    /// turns out mirrored.
    pub fn new(pin_a: A, pin_b: B) -> Self {
        let last_a = pin_a.is_high();
        Self {
            pin_a,
            pin_b,
            last_a,
            steps: 0,
            reversed: false,
        }
    }

    /// Create a decoder with the mirrored sign convention
    pub fn new_reversed(pin_a: A, pin_b: B) -> Self {
        let mut dec = Self::new(pin_a, pin_b);
        dec.reversed = true;
        dec
    }

    /// Sample the phases and accumulate a step if one completed
    ///
    /// Only a LOW->HIGH transition of phase A accumulates; the falling
    /// edge and unchanged levels do nothing. Call at a rate faster than
    /// the shortest phase pulse the encoder produces when spun.
    pub fn poll(&mut self) {
        let a = self.pin_a.is_high();
        if !self.last_a && a {
            // Rising edge of A: B's level now decides the direction
            if self.pin_b.is_high() != self.reversed {
                self.steps = self.steps.saturating_add(1);
            } else {
                self.steps = self.steps.saturating_sub(1);
            }
        }
        self.last_a = a;
    }

    /// Drain the step accumulator
    ///
    /// Returns the net steps accumulated since the previous call and
    /// resets the count to zero. The accumulator saturates at the `i32`
    /// bounds rather than wrapping, so a caller that stops draining gets
    /// a clamped count instead of a sign flip.
    pub fn take_steps(&mut self) -> i32 {
        let steps = self.steps;
        self.steps = 0;
        steps
    }

    /// Re-synchronize to the current phase A level and zero the accumulator
    pub fn reset(&mut self) {
        self.last_a = self.pin_a.is_high();
        self.steps = 0;
    }
}
