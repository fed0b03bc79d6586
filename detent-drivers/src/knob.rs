//! Rotary encoder with an integrated push button
//!
//! Pure composition of a [`QuadratureDecoder`] and an [`EdgeDetector`];
//! the knob has no state machine of its own.

use detent_hal::InputPin;

use crate::edge::EdgeDetector;
use crate::quadrature::QuadratureDecoder;

/// A rotary encoder and its push button, polled as one device
///
/// Owns both sub-components exclusively, so a single `poll` always
/// advances encoder and button together. The button is wired active-low
/// (pull-up): the logical level is true while it is held, so the press
/// is the rising edge and the release the falling edge.
pub struct Knob<A, B, P> {
    decoder: QuadratureDecoder<A, B>,
    button: EdgeDetector<P>,
}

impl<A: InputPin, B: InputPin, P: InputPin> Knob<A, B, P> {
    /// Create a new knob
    ///
    /// # Arguments
    /// - `pin_a`, `pin_b`: The encoder phases
    /// - `pin_button`: The push button, active-low
    pub fn new(pin_a: A, pin_b: B, pin_button: P) -> Self {
        Self {
            decoder: QuadratureDecoder::new(pin_a, pin_b),
            button: EdgeDetector::new_active_low(pin_button),
        }
    }

    /// Create a knob whose encoder uses the mirrored sign convention
    pub fn new_reversed(pin_a: A, pin_b: B, pin_button: P) -> Self {
        Self {
            decoder: QuadratureDecoder::new_reversed(pin_a, pin_b),
            button: EdgeDetector::new_active_low(pin_button),
        }
    }

    /// Sample both the encoder phases and the button
    pub fn poll(&mut self) {
        self.decoder.poll();
        self.button.poll();
    }

    /// Drain the encoder's step accumulator
    pub fn take_steps(&mut self) -> i32 {
        self.decoder.take_steps()
    }

    /// Consume a button press (logical rising edge)
    pub fn take_button_rising(&mut self) -> bool {
        self.button.take_rising()
    }

    /// Consume a button release (logical falling edge)
    pub fn take_button_falling(&mut self) -> bool {
        self.button.take_falling()
    }

    /// Current logical button level: true while held
    pub fn button_level(&self) -> bool {
        self.button.level()
    }

    /// Mutable access to the button detector, e.g. to attach callbacks
    pub fn button_mut(&mut self) -> &mut EdgeDetector<P> {
        &mut self.button
    }

    /// Re-synchronize both sub-components and drop accumulated state
    pub fn reset(&mut self) {
        self.decoder.reset();
        self.button.reset();
    }
}
