//! GPIO input adapter for RP2040
//!
//! Wraps `embassy_rp::gpio::Input` behind the `detent-hal` input trait.

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

use detent_hal::InputPin;

/// An RP2040 GPIO input usable by the Detent drivers
pub struct RpInput<'d> {
    inner: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Configure a GPIO as an input with the requested pull resistor
    pub fn new(pin: Peri<'d, impl Pin>, pull: detent_hal::Pull) -> Self {
        Self {
            inner: Input::new(pin, map_pull(pull)),
        }
    }

    /// Wrap an already-configured input
    pub fn from_input(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

fn map_pull(pull: detent_hal::Pull) -> Pull {
    match pull {
        detent_hal::Pull::None => Pull::None,
        detent_hal::Pull::Up => Pull::Up,
        detent_hal::Pull::Down => Pull::Down,
    }
}
