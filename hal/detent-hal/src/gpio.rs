//! GPIO pin abstractions
//!
//! Provides the digital input trait implemented by chip-specific HALs.
//! Sampling is infallible: a configured input pin always has a level.

/// Requested pull resistor configuration for an input pin
///
/// Pulls are applied once, when the chip adapter constructs the pin.
/// The drivers never reconfigure pins at poll time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No pull resistor (externally biased)
    None,
    /// Pull-up (idle high; typical switch-to-ground wiring)
    Up,
    /// Pull-down (idle low)
    Down,
}

/// Digital input pin
///
/// Implementations should return the current hardware level at call
/// time, without blocking. The drivers sample through this trait only
/// and never touch hardware registers directly.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
