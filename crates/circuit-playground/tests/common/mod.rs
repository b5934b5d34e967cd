//! Mock board shared by the integration tests.

#![allow(dead_code, clippy::new_without_default)]

use circuit_playground::{BoardConfig, CircuitPlayground, Hardware, Peripherals, PIXEL_COUNT};
use playground_hal::mocks::*;

/// Host hardware made of mocks
pub struct Host;

impl Hardware for Host {
    type Button = MockPin;
    type Switch = MockPin;
    type Led = MockPin;
    type Pixels = MockPixels;
    type Thermistor = MockTemperature;
    type Photocell = MockAnalog;
    type Accelerometer = MockAccelerometer;
    type Touch = MockTouchController;
    type Poller = MockPoller;
}

/// Test-side handles onto the mocks moved into the board
pub struct Handles {
    pub button_a: MockPin,
    pub button_b: MockPin,
    pub switch: MockPin,
    pub red_led: MockPin,
    pub thermistor: MockTemperature,
    pub photocell: MockAnalog,
    pub accelerometer: MockAccelerometer,
    pub touch: MockTouchController,
    pub gamepad: MockPoller,
}

impl Handles {
    pub fn new() -> Self {
        Self {
            button_a: MockPin::new(false),
            button_b: MockPin::new(false),
            switch: MockPin::new(false),
            red_led: MockPin::new(false),
            thermistor: MockTemperature::new(25.0),
            photocell: MockAnalog::new(0),
            accelerometer: MockAccelerometer::new(),
            touch: MockTouchController::new(),
            gamepad: MockPoller::new(),
        }
    }

    pub fn peripherals(&self) -> Peripherals<Host> {
        Peripherals {
            button_a: self.button_a.clone(),
            button_b: self.button_b.clone(),
            switch: self.switch.clone(),
            red_led: self.red_led.clone(),
            pixels: MockPixels::new(PIXEL_COUNT),
            thermistor: self.thermistor.clone(),
            photocell: self.photocell.clone(),
            accelerometer: self.accelerometer.clone(),
            touch: self.touch.clone(),
            gamepad: self.gamepad.clone(),
        }
    }
}

/// Board with default config plus handles onto its mocks
pub fn board() -> (CircuitPlayground<Host>, Handles) {
    let handles = Handles::new();
    let board = CircuitPlayground::new(handles.peripherals(), BoardConfig::default())
        .expect("mock board construction");
    (board, handles)
}
