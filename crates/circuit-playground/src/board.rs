//! The board facade
//!
//! [`CircuitPlayground`] owns every on-board peripheral and forwards to the
//! driver behind each one. Concrete driver types are picked through a
//! [`Hardware`] implementation so the same facade runs on the SAMD21 HAL or on
//! host mocks.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState, StatefulOutputPin};
use playground_hal::{
    Acceleration, Accelerometer, AnalogInput, ButtonPoller, PixelStrip, TapMode,
    TemperatureSensor, TouchController, TouchPin,
};

use crate::buttons::{Button, ButtonSet};
use crate::config::BoardConfig;
use crate::error::Error;
use crate::light::light_from_raw;
use crate::touch::TouchPads;

/// Driver types for each on-board peripheral
pub trait Hardware {
    /// Buttons A and B (high while pressed)
    type Button: InputPin;
    /// Slide switch
    type Switch: InputPin;
    /// Red LED next to the USB port (D13)
    type Led: StatefulOutputPin;
    /// NeoPixel ring
    type Pixels: PixelStrip;
    /// Temperature sensor (thermistor on A9)
    type Thermistor: TemperatureSensor;
    /// Light sensor (photocell on A8)
    type Photocell: AnalogInput;
    /// Motion sensor (LIS3DH)
    type Accelerometer: Accelerometer;
    /// Capacitive touch peripheral
    type Touch: TouchController;
    /// Debounced button poller
    type Poller: ButtonPoller;
}

/// Error of the button pins
pub type ButtonError<H> = <<H as Hardware>::Button as ErrorType>::Error;
/// Error of the slide switch pin
pub type SwitchError<H> = <<H as Hardware>::Switch as ErrorType>::Error;
/// Error of the red LED pin
pub type LedError<H> = <<H as Hardware>::Led as ErrorType>::Error;
/// Error of the accelerometer driver
pub type AccelError<H> = <<H as Hardware>::Accelerometer as Accelerometer>::Error;
/// Error of the touch controller and its sensors
pub type TouchError<H> = <<H as Hardware>::Touch as TouchController>::Error;
/// Sensor handle produced by the touch controller
pub type TouchSensorOf<H> = <<H as Hardware>::Touch as TouchController>::Sensor;
/// Error of the temperature sensor
pub type TemperatureError<H> = <<H as Hardware>::Thermistor as TemperatureSensor>::Error;
/// Error of the photocell input
pub type LightError<H> = <<H as Hardware>::Photocell as AnalogInput>::Error;
/// Error of the button poller
pub type PollerError<H> = <<H as Hardware>::Poller as ButtonPoller>::Error;

/// Driver handles moved into [`CircuitPlayground::new`]
pub struct Peripherals<H: Hardware> {
    /// Button A
    pub button_a: H::Button,
    /// Button B
    pub button_b: H::Button,
    /// Slide switch
    pub switch: H::Switch,
    /// Red LED
    pub red_led: H::Led,
    /// NeoPixel ring
    pub pixels: H::Pixels,
    /// Temperature sensor
    pub thermistor: H::Thermistor,
    /// Light sensor
    pub photocell: H::Photocell,
    /// Accelerometer
    pub accelerometer: H::Accelerometer,
    /// Touch controller
    pub touch: H::Touch,
    /// Debounced button poller
    pub gamepad: H::Poller,
}

/// Circuit Playground Express board
pub struct CircuitPlayground<H: Hardware> {
    button_a: H::Button,
    button_b: H::Button,
    switch: H::Switch,
    red_led: H::Led,
    pixels: H::Pixels,
    thermistor: H::Thermistor,
    photocell: H::Photocell,
    accelerometer: H::Accelerometer,
    touch: TouchPads<H::Touch>,
    gamepad: H::Poller,
    config: BoardConfig,
    tap_mode: TapMode,
}

impl<H: Hardware> CircuitPlayground<H> {
    /// Take ownership of the peripherals and configure the accelerometer.
    ///
    /// Sets the range and applies `config.tap_mode`. Fails without building
    /// the board if either step fails.
    pub fn new(peripherals: Peripherals<H>, config: BoardConfig) -> Result<Self, AccelError<H>> {
        let Peripherals {
            button_a,
            button_b,
            switch,
            red_led,
            pixels,
            thermistor,
            photocell,
            mut accelerometer,
            touch,
            gamepad,
        } = peripherals;

        accelerometer.set_range(config.range)?;
        accelerometer.set_tap(config.tap_config(config.tap_mode))?;
        info!(
            "Circuit Playground ready: range {}, taps {}",
            config.range.name(),
            config.tap_mode.name()
        );

        Ok(Self {
            button_a,
            button_b,
            switch,
            red_led,
            pixels,
            thermistor,
            photocell,
            accelerometer,
            touch: TouchPads::new(touch),
            gamepad,
            config,
            tap_mode: config.tap_mode,
        })
    }

    /// Configuration the board was built with
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // ── Touch ───────────────────────────────────────────────────────────────

    /// Whether `pad` is touched. The pad is bound on first read.
    pub fn touch(&mut self, pad: TouchPin) -> Result<bool, TouchError<H>> {
        self.touch.touch(pad)
    }

    /// Touch by slot number as printed on the board (1 = A1 .. 7 = TX).
    pub fn touch_slot(&mut self, index: usize) -> Result<bool, Error<TouchError<H>>> {
        let Some(pad) = TouchPin::from_slot(index) else {
            warn!("touch slot {} does not exist", index);
            return Err(Error::InvalidTouchSlot(index));
        };
        self.touch.touch(pad).map_err(Error::Driver)
    }

    /// Whether pad A1 is touched
    pub fn touch_a1(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A1)
    }

    /// Whether pad A2 is touched
    pub fn touch_a2(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A2)
    }

    /// Whether pad A3 is touched
    pub fn touch_a3(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A3)
    }

    /// Whether pad A4 is touched
    pub fn touch_a4(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A4)
    }

    /// Whether pad A5 is touched
    pub fn touch_a5(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A5)
    }

    /// Whether pad A6 is touched
    pub fn touch_a6(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::A6)
    }

    /// Whether pad TX is touched
    pub fn touch_tx(&mut self) -> Result<bool, TouchError<H>> {
        self.touch(TouchPin::Tx)
    }

    /// Whether pad A7 is touched (the TX pad on the Express)
    pub fn touch_a7(&mut self) -> Result<bool, TouchError<H>> {
        self.touch_tx()
    }

    /// Raise (positive) or lower (negative) every pad's touch threshold.
    ///
    /// Calls accumulate. Pads not read yet pick up the total when bound.
    pub fn adjust_touch_threshold(&mut self, delta: i32) {
        self.touch.adjust_threshold(delta);
    }

    /// Sensor behind `pad`, `None` until the pad has been read
    pub fn touch_pad(&self, pad: TouchPin) -> Option<&TouchSensorOf<H>> {
        self.touch.sensor(pad)
    }

    // ── Taps ────────────────────────────────────────────────────────────────

    /// Current tap detection mode
    pub fn detect_taps(&self) -> TapMode {
        self.tap_mode
    }

    /// Reconfigure tap detection.
    ///
    /// The stored mode only changes once the driver accepted it.
    pub fn set_detect_taps(&mut self, mode: TapMode) -> Result<(), AccelError<H>> {
        self.accelerometer.set_tap(self.config.tap_config(mode))?;
        self.tap_mode = mode;
        debug!("tap detection {}", mode.name());
        Ok(())
    }

    /// Numeric form of [`Self::set_detect_taps`]: 0 off, 1 single, 2 double.
    ///
    /// Other values are rejected without touching the accelerometer.
    pub fn set_detect_taps_raw(&mut self, value: u8) -> Result<(), Error<AccelError<H>>> {
        let Some(mode) = TapMode::from_u8(value) else {
            warn!("tap mode {} is invalid", value);
            return Err(Error::InvalidTapMode(value));
        };
        self.set_detect_taps(mode).map_err(Error::Driver)
    }

    /// Whether a tap was detected since the last call
    pub fn tapped(&mut self) -> Result<bool, AccelError<H>> {
        self.accelerometer.tapped()
    }

    // ── Motion ──────────────────────────────────────────────────────────────

    /// Acceleration in m/s²
    pub fn acceleration(&mut self) -> Result<Acceleration, AccelError<H>> {
        self.accelerometer.acceleration()
    }

    /// Shake test at the configured threshold (30 m/s² by default)
    pub fn shake(&mut self) -> Result<bool, AccelError<H>> {
        self.accelerometer.shake(self.config.shake_threshold)
    }

    /// Shake test at `threshold` m/s².
    ///
    /// Gravity alone reads about 9.8, so values below ~10 always report a
    /// shake.
    pub fn shake_with_threshold(&mut self, threshold: f32) -> Result<bool, AccelError<H>> {
        self.accelerometer.shake(threshold)
    }

    // ── Buttons and switch ──────────────────────────────────────────────────

    /// Whether button A is held
    pub fn button_a(&mut self) -> Result<bool, ButtonError<H>> {
        self.button_a.is_high()
    }

    /// Whether button B is held
    pub fn button_b(&mut self) -> Result<bool, ButtonError<H>> {
        self.button_b.is_high()
    }

    /// Buttons pressed since the previous call
    pub fn were_pressed(&mut self) -> Result<ButtonSet, PollerError<H>> {
        let mask = self.gamepad.get_pressed()?;
        Ok(ButtonSet::from_mask(mask))
    }

    /// Sample both buttons into the poller.
    ///
    /// Needed only when the poller is fed from the main loop rather than a
    /// timer; call at a steady rate.
    pub fn scan_buttons(&mut self) -> Result<(), ButtonError<H>> {
        let mut mask = 0;
        if self.button_a.is_high()? {
            mask |= Button::A.mask();
        }
        if self.button_b.is_high()? {
            mask |= Button::B.mask();
        }
        self.gamepad.sample(mask);
        trace!("button scan {}", mask);
        Ok(())
    }

    /// Slide switch position (`true` when slid left)
    pub fn switch(&mut self) -> Result<bool, SwitchError<H>> {
        self.switch.is_high()
    }

    // ── Environment ─────────────────────────────────────────────────────────

    /// Temperature in °C
    pub fn temperature(&mut self) -> Result<f32, TemperatureError<H>> {
        self.thermistor.temperature()
    }

    /// Light level on a 0..=330 scale
    pub fn light(&mut self) -> Result<u32, LightError<H>> {
        let raw = self.photocell.read()?;
        Ok(light_from_raw(u32::from(raw)))
    }

    // ── LEDs ────────────────────────────────────────────────────────────────

    /// Whether the red LED is on
    pub fn red_led(&mut self) -> Result<bool, LedError<H>> {
        self.red_led.is_set_high()
    }

    /// Switch the red LED on or off
    pub fn set_red_led(&mut self, on: bool) -> Result<(), LedError<H>> {
        self.red_led.set_state(PinState::from(on))
    }

    /// NeoPixel ring
    pub fn pixels(&self) -> &H::Pixels {
        &self.pixels
    }

    /// NeoPixel ring, for setting colours and brightness
    pub fn pixels_mut(&mut self) -> &mut H::Pixels {
        &mut self.pixels
    }
}
