//! Hardware Abstraction Layer (HAL) for the Circuit Playground Express
//!
//! This crate provides trait-based abstractions for every peripheral on the
//! board, enabling development and testing without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! User code
//!         ↓
//! Board facade (circuit-playground crate)
//!         ↓
//! Playground HAL (this crate - capability traits + board drivers)
//!         ↓
//! Chip HAL (embedded-hal implementations for the SAMD21)
//! ```
//!
//! # Capabilities
//!
//! - [`Accelerometer`] - range, tap detection, acceleration, shake
//! - [`TouchController`] / [`TouchSensor`] - capacitive touch pads
//! - [`PixelStrip`] - addressable RGB LEDs
//! - [`TemperatureSensor`] - temperature in °C
//! - [`AnalogInput`] - 16-bit analog samples
//! - [`ButtonPoller`] - debounced "pressed since last poll" buttons
//!
//! Digital I/O and the I²C bus use the `embedded-hal` 1.0 traits directly.
//!
//! # Drivers
//!
//! - [`lis3dh`] - LIS3DH accelerometer over I²C
//! - [`thermistor`] - NTC thermistor on an analog input
//! - [`gamepad`] - software button debouncer
//!
//! # Features
//!
//! - `std`: Enable standard library support and the [`mocks`] module
//! - `defmt`: Enable defmt derives and log output
//! - `tracing`: Log through `tracing` on desktop builds

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
mod fmt;

pub mod accel;
pub mod analog;
pub mod gamepad;
pub mod lis3dh;
pub mod pixels;
pub mod thermistor;
pub mod touch;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export capability traits
pub use accel::{Acceleration, Accelerometer, Range, TapConfig, TapMode, TapTiming};
pub use analog::AnalogInput;
pub use gamepad::{ButtonPoller, GamePad};
pub use pixels::{color_from_hex, color_from_tuple, PixelStrip, Rgb888, RgbColor};
pub use thermistor::{TemperatureSensor, Thermistor, ThermistorError, ThermistorParams};
pub use touch::{TouchController, TouchPin, TouchSensor};

// Re-export drivers
pub use lis3dh::{Lis3dh, Lis3dhError, NoPin};
