//! Mock implementations for testing
//!
//! Every mock that the code under test takes ownership of is `Clone` and
//! shares its state through `Rc`, so a test keeps one handle to drive inputs
//! and inspect calls after moving the other into a driver or board.

#![cfg(any(test, feature = "std"))]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::accel::{Acceleration, Accelerometer, Range, TapConfig};
use crate::analog::AnalogInput;
use crate::gamepad::ButtonPoller;
use crate::pixels::{PixelStrip, Rgb888, RgbColor};
use crate::thermistor::TemperatureSensor;
use crate::touch::{TouchController, TouchPin, TouchSensor};

/// Error raised by fallible mocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Failure injected by the test
    Injected,
    /// Pixel index past the end of the strip
    IndexOutOfRange(usize),
}

// ── Digital pin ─────────────────────────────────────────────────────────────

/// Mock GPIO usable as input or output
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MockPin {
    /// Create a pin at `level`
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// Drive the line from outside (simulates a button or switch)
    pub fn set_level(&self, level: bool) {
        self.level.set(level);
    }

    /// Current line level
    pub fn level(&self) -> bool {
        self.level.get()
    }

    /// Number of output writes
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn drive(&self, level: bool) {
        self.level.set(level);
        self.writes.set(self.writes.get().saturating_add(1));
    }
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

// ── Analog input ────────────────────────────────────────────────────────────

/// Mock analog input returning a settable raw value
#[derive(Debug, Clone, Default)]
pub struct MockAnalog {
    raw: Rc<Cell<u16>>,
}

impl MockAnalog {
    /// Create an input that reads `raw`
    pub fn new(raw: u16) -> Self {
        Self {
            raw: Rc::new(Cell::new(raw)),
        }
    }

    /// Change the value returned by the next read
    pub fn set(&self, raw: u16) {
        self.raw.set(raw);
    }
}

impl AnalogInput for MockAnalog {
    type Error = core::convert::Infallible;

    fn read(&mut self) -> Result<u16, Self::Error> {
        Ok(self.raw.get())
    }
}

// ── Temperature ─────────────────────────────────────────────────────────────

/// Mock temperature sensor
#[derive(Debug, Clone, Default)]
pub struct MockTemperature {
    celsius: Rc<Cell<f32>>,
}

impl MockTemperature {
    /// Create a sensor reading `celsius`
    pub fn new(celsius: f32) -> Self {
        Self {
            celsius: Rc::new(Cell::new(celsius)),
        }
    }

    /// Change the reported temperature
    pub fn set(&self, celsius: f32) {
        self.celsius.set(celsius);
    }
}

impl TemperatureSensor for MockTemperature {
    type Error = core::convert::Infallible;

    fn temperature(&mut self) -> Result<f32, Self::Error> {
        Ok(self.celsius.get())
    }
}

// ── Accelerometer ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct AccelState {
    ranges: Vec<Range>,
    taps: Vec<TapConfig>,
    pending_taps: usize,
    acceleration: Acceleration,
    fail: bool,
}

/// Mock accelerometer recording every configuration call
#[derive(Debug, Clone, Default)]
pub struct MockAccelerometer {
    state: Rc<RefCell<AccelState>>,
}

impl MockAccelerometer {
    /// Create an accelerometer at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranges set so far, in order
    pub fn ranges(&self) -> Vec<Range> {
        self.state.borrow().ranges.clone()
    }

    /// Tap configurations applied so far, in order
    pub fn tap_configs(&self) -> Vec<TapConfig> {
        self.state.borrow().taps.clone()
    }

    /// Queue one tap event
    pub fn tap(&self) {
        let mut state = self.state.borrow_mut();
        state.pending_taps = state.pending_taps.saturating_add(1);
    }

    /// Set the acceleration returned by reads
    pub fn set_acceleration(&self, acceleration: Acceleration) {
        self.state.borrow_mut().acceleration = acceleration;
    }

    /// Make every subsequent call fail with [`MockError::Injected`]
    pub fn fail(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }

    fn check(&self) -> Result<(), MockError> {
        if self.state.borrow().fail {
            Err(MockError::Injected)
        } else {
            Ok(())
        }
    }
}

impl Accelerometer for MockAccelerometer {
    type Error = MockError;

    fn set_range(&mut self, range: Range) -> Result<(), Self::Error> {
        self.check()?;
        self.state.borrow_mut().ranges.push(range);
        Ok(())
    }

    fn set_tap(&mut self, config: TapConfig) -> Result<(), Self::Error> {
        self.check()?;
        self.state.borrow_mut().taps.push(config);
        Ok(())
    }

    fn tapped(&mut self) -> Result<bool, Self::Error> {
        self.check()?;
        let mut state = self.state.borrow_mut();
        match state.pending_taps.checked_sub(1) {
            Some(left) => {
                state.pending_taps = left;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        self.check()?;
        Ok(self.state.borrow().acceleration)
    }

    fn shake(&mut self, threshold: f32) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.state.borrow().acceleration.magnitude() > threshold)
    }
}

// ── Touch ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct TouchState {
    binds: Vec<TouchPin>,
    touched: Vec<TouchPin>,
}

/// Mock touch controller recording every bind
#[derive(Debug, Clone)]
pub struct MockTouchController {
    state: Rc<RefCell<TouchState>>,
    baseline: u16,
}

impl MockTouchController {
    /// Threshold given to freshly bound sensors by [`MockTouchController::new`]
    pub const DEFAULT_BASELINE: u16 = 1500;

    /// Controller whose sensors start at [`Self::DEFAULT_BASELINE`]
    pub fn new() -> Self {
        Self::with_baseline(Self::DEFAULT_BASELINE)
    }

    /// Controller whose sensors start at `baseline`
    pub fn with_baseline(baseline: u16) -> Self {
        Self {
            state: Rc::new(RefCell::new(TouchState::default())),
            baseline,
        }
    }

    /// Every bind so far, in order
    pub fn binds(&self) -> Vec<TouchPin> {
        self.state.borrow().binds.clone()
    }

    /// How often `pin` was bound
    pub fn bind_count(&self, pin: TouchPin) -> usize {
        self.state.borrow().binds.iter().filter(|p| **p == pin).count()
    }

    /// Simulate a finger on (or off) `pin`
    pub fn set_touched(&self, pin: TouchPin, touched: bool) {
        let mut state = self.state.borrow_mut();
        state.touched.retain(|p| *p != pin);
        if touched {
            state.touched.push(pin);
        }
    }
}

impl Default for MockTouchController {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchController for MockTouchController {
    type Error = core::convert::Infallible;
    type Sensor = MockTouchSensor;

    fn bind(&mut self, pin: TouchPin) -> Result<Self::Sensor, Self::Error> {
        self.state.borrow_mut().binds.push(pin);
        Ok(MockTouchSensor {
            pin,
            threshold: self.baseline,
            state: Rc::clone(&self.state),
        })
    }
}

/// Sensor handed out by [`MockTouchController`]
#[derive(Debug)]
pub struct MockTouchSensor {
    pin: TouchPin,
    threshold: u16,
    state: Rc<RefCell<TouchState>>,
}

impl MockTouchSensor {
    /// Pad this sensor is bound to
    pub fn pin(&self) -> TouchPin {
        self.pin
    }
}

impl TouchSensor for MockTouchSensor {
    type Error = core::convert::Infallible;

    fn is_touched(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state.borrow().touched.contains(&self.pin))
    }

    fn threshold(&self) -> u16 {
        self.threshold
    }

    fn set_threshold(&mut self, threshold: u16) {
        self.threshold = threshold;
    }
}

// ── Pixels ──────────────────────────────────────────────────────────────────

/// Mock LED strip keeping the assigned colours in memory
#[derive(Debug, Clone)]
pub struct MockPixels {
    colors: Vec<Rgb888>,
    brightness: f32,
    show_count: usize,
}

impl MockPixels {
    /// Strip of `len` dark pixels at full brightness
    pub fn new(len: usize) -> Self {
        Self {
            colors: std::vec![Rgb888::BLACK; len],
            brightness: 1.0,
            show_count: 0,
        }
    }

    /// Number of [`PixelStrip::show`] calls
    pub fn show_count(&self) -> usize {
        self.show_count
    }
}

impl PixelStrip for MockPixels {
    type Error = MockError;

    fn len(&self) -> usize {
        self.colors.len()
    }

    fn brightness(&self) -> f32 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: f32) -> Result<(), Self::Error> {
        self.brightness = brightness.clamp(0.0, 1.0);
        Ok(())
    }

    fn pixel(&self, index: usize) -> Option<Rgb888> {
        self.colors.get(index).copied()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb888) -> Result<(), Self::Error> {
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(MockError::IndexOutOfRange(index))?;
        *slot = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.show_count = self.show_count.saturating_add(1);
        Ok(())
    }
}

// ── Button poller ───────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PollerState {
    pending: u8,
    samples: Vec<u8>,
    polls: usize,
}

/// Mock button poller; latches whatever the test presses until polled
#[derive(Debug, Clone, Default)]
pub struct MockPoller {
    state: Rc<RefCell<PollerState>>,
}

impl MockPoller {
    /// Poller with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the buttons in `mask` as pressed
    pub fn press(&self, mask: u8) {
        self.state.borrow_mut().pending |= mask;
    }

    /// Samples fed through [`ButtonPoller::sample`], in order
    pub fn samples(&self) -> Vec<u8> {
        self.state.borrow().samples.clone()
    }

    /// Number of [`ButtonPoller::get_pressed`] calls
    pub fn poll_count(&self) -> usize {
        self.state.borrow().polls
    }
}

impl ButtonPoller for MockPoller {
    type Error = core::convert::Infallible;

    fn get_pressed(&mut self) -> Result<u8, Self::Error> {
        let mut state = self.state.borrow_mut();
        state.polls = state.polls.saturating_add(1);
        Ok(core::mem::take(&mut state.pending))
    }

    fn sample(&mut self, current: u8) {
        self.state.borrow_mut().samples.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accel::{TapMode, TapTiming};

    #[test]
    fn test_mock_pin_shares_level() {
        let handle = MockPin::new(false);
        let mut pin = handle.clone();
        assert_eq!(pin.is_high(), Ok(false));

        handle.set_level(true);
        assert_eq!(pin.is_high(), Ok(true));

        pin.set_low().unwrap();
        assert!(!handle.level());
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_mock_accelerometer_records_and_drains_taps() {
        let handle = MockAccelerometer::new();
        let mut accel = handle.clone();

        let config = TapConfig {
            mode: TapMode::Single,
            timing: TapTiming {
                threshold: 90,
                time_limit: 4,
                time_latency: 50,
                time_window: 255,
            },
        };
        accel.set_tap(config).unwrap();
        assert_eq!(handle.tap_configs(), std::vec![config]);

        handle.tap();
        assert_eq!(accel.tapped(), Ok(true));
        assert_eq!(accel.tapped(), Ok(false));
    }

    #[test]
    fn test_mock_accelerometer_injected_failure() {
        let handle = MockAccelerometer::new();
        let mut accel = handle.clone();
        handle.fail(true);
        assert_eq!(accel.set_range(Range::G8), Err(MockError::Injected));
        assert!(handle.ranges().is_empty());
    }

    #[test]
    fn test_mock_touch_reads_shared_state() {
        let handle = MockTouchController::new();
        let mut controller = handle.clone();
        let mut sensor = controller.bind(TouchPin::A3).unwrap();

        assert_eq!(sensor.threshold(), MockTouchController::DEFAULT_BASELINE);
        assert_eq!(sensor.is_touched(), Ok(false));
        handle.set_touched(TouchPin::A3, true);
        assert_eq!(sensor.is_touched(), Ok(true));
        assert_eq!(handle.bind_count(TouchPin::A3), 1);
    }

    #[test]
    fn test_mock_pixels_bounds() {
        let mut pixels = MockPixels::new(10);
        pixels.set_pixel(9, Rgb888::RED).unwrap();
        assert_eq!(pixels.pixel(9), Some(Rgb888::RED));
        assert_eq!(
            pixels.set_pixel(10, Rgb888::RED),
            Err(MockError::IndexOutOfRange(10))
        );
        pixels.set_brightness(3.0).unwrap();
        assert_eq!(pixels.brightness(), 1.0);
    }

    #[test]
    fn test_mock_poller_drains() {
        let handle = MockPoller::new();
        let mut poller = handle.clone();
        handle.press(0b01);
        assert_eq!(poller.get_pressed(), Ok(0b01));
        assert_eq!(poller.get_pressed(), Ok(0));
        assert_eq!(handle.poll_count(), 2);
    }
}
