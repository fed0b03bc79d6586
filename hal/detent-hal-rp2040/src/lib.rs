//! RP2040-specific pin adapter for the Detent input drivers
//!
//! Implements the `detent-hal` traits on top of `embassy-rp` GPIO, so
//! the drivers in `detent-drivers` can run unchanged on RP2040 boards.
//! Pull resistors are configured once, at pin construction; the drivers
//! never reconfigure pins.

#![no_std]

pub mod gpio;

pub use gpio::RpInput;
