//! Input device drivers
//!
//! This crate turns repeatedly-sampled digital pin levels into discrete,
//! consumable events:
//!
//! - [`EdgeDetector`] - rising/falling edge detection for a button
//! - [`QuadratureDecoder`] - step accumulation for a gray-code rotary encoder
//! - [`Knob`] - a rotary encoder with an integrated push button
//!
//! All drivers are polled: the caller samples them from a timer tick or a
//! tight control loop, at a rate faster than the shortest pulse the
//! hardware can produce. Inputs are assumed hardware-debounced; there is
//! no software debounce here. Every operation is a synchronous pin read
//! plus O(1) bookkeeping, safe to call from interrupt context.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod edge;
pub mod knob;
pub mod quadrature;

pub use edge::{Edge, EdgeDetector};
pub use knob::Knob;
pub use quadrature::QuadratureDecoder;
