//! Board support for the Adafruit Circuit Playground Express
//!
//! One object, [`CircuitPlayground`], owns every on-board peripheral: buttons
//! A and B, the slide switch, the LIS3DH accelerometer, seven capacitive touch
//! pads, ten NeoPixels, the thermistor, the photocell and the red LED.
//! Sensing and driving are left to the drivers supplied through [`Hardware`];
//! the board adds lazy touch-pad binding with a shared threshold adjustment,
//! tap-detection presets and the light-level scale.
//!
//! # Example
//!
//! ```
//! use circuit_playground::{BoardConfig, CircuitPlayground, Hardware, Peripherals};
//! use playground_hal::mocks::*;
//! use playground_hal::TapMode;
//!
//! struct Host;
//!
//! impl Hardware for Host {
//!     type Button = MockPin;
//!     type Switch = MockPin;
//!     type Led = MockPin;
//!     type Pixels = MockPixels;
//!     type Thermistor = MockTemperature;
//!     type Photocell = MockAnalog;
//!     type Accelerometer = MockAccelerometer;
//!     type Touch = MockTouchController;
//!     type Poller = MockPoller;
//! }
//!
//! let peripherals = Peripherals::<Host> {
//!     button_a: MockPin::new(false),
//!     button_b: MockPin::new(false),
//!     switch: MockPin::new(true),
//!     red_led: MockPin::new(false),
//!     pixels: MockPixels::new(circuit_playground::PIXEL_COUNT),
//!     thermistor: MockTemperature::new(21.5),
//!     photocell: MockAnalog::new(0),
//!     accelerometer: MockAccelerometer::new(),
//!     touch: MockTouchController::new(),
//!     gamepad: MockPoller::new(),
//! };
//!
//! let mut cpx = CircuitPlayground::new(peripherals, BoardConfig::default()).unwrap();
//! cpx.set_detect_taps(TapMode::Double).unwrap();
//! assert!(!cpx.touch_a1().unwrap());
//! assert_eq!(cpx.light().unwrap(), 0);
//! ```
//!
//! # Features
//!
//! - `std`: Host builds; enables `playground_hal::mocks`
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
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
mod fmt;

pub mod board;
pub mod buttons;
pub mod config;
pub mod error;
pub mod light;
pub mod touch;

pub use board::{
    AccelError, ButtonError, CircuitPlayground, Hardware, LedError, LightError, Peripherals,
    PollerError, SwitchError, TemperatureError, TouchError, TouchSensorOf,
};
pub use buttons::{Button, ButtonSet};
pub use config::{
    BoardConfig, ACCELEROMETER_ADDRESS, DEFAULT_SHAKE_THRESHOLD, DOUBLE_TAP, LIGHT_FULL_SCALE,
    LIGHT_SCALE, PIXEL_COUNT, SINGLE_TAP, THERMISTOR,
};
pub use error::Error;
pub use light::light_from_raw;
pub use touch::{TouchPads, TouchSlot};

// Types callers need alongside the board
pub use playground_hal::{Acceleration, Range, Rgb888, RgbColor, TapMode, TouchPin};
