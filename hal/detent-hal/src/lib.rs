//! Detent Hardware Abstraction Layer
//!
//! This crate defines the pin traits the Detent input drivers are built
//! against, so the same decoding logic runs on any chip (or on the host,
//! with mock pins, for testing).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (firmware, host tests)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-drivers (decoding logic)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal-rp2040 (chip adapter)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input sampling

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key items at crate root for convenience
pub use gpio::{InputPin, Pull};
