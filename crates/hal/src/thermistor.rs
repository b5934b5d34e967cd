//! NTC thermistor temperature sensor.
//!
//! The thermistor sits in a voltage divider with a fixed series resistor and
//! is read through an [`AnalogInput`]. Resistance is converted to temperature
//! with the Beta form of the Steinhart-Hart equation:
//!
//! ```text
//! 1/T = 1/T0 + (1/B) * ln(R/R0)
//! ```

use thiserror_no_std::Error;

use crate::analog::AnalogInput;

const KELVIN_OFFSET: f32 = 273.15;
/// Full-scale analog reading.
const ADC_FULL_SCALE: f32 = 65535.0;

/// Divider and thermistor constants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermistorParams {
    /// Resistance at `nominal_temperature_c`, in ohms
    pub nominal_resistance: f32,
    /// Fixed divider resistor, in ohms
    pub series_resistance: f32,
    /// Reference temperature for `nominal_resistance`, in °C
    pub nominal_temperature_c: f32,
    /// Beta coefficient, in kelvin
    pub b_coefficient: f32,
    /// `true` when the thermistor connects the analog pin to the supply
    /// rail, `false` when it connects to ground
    pub high_side: bool,
}

/// Thermistor errors
#[derive(Debug, Error)]
pub enum ThermistorError<E> {
    /// Analog read failed
    #[error("thermistor ADC read failed")]
    Adc(E),
    /// The divider reading has no physical temperature (open or shorted)
    #[error("thermistor reading {0} out of range")]
    OutOfRange(u16),
}

/// Temperature sensor capability
pub trait TemperatureSensor {
    /// Error type
    type Error;

    /// Current temperature in °C
    fn temperature(&mut self) -> Result<f32, Self::Error>;
}

/// Thermistor driver over an analog input
pub struct Thermistor<A> {
    adc: A,
    params: ThermistorParams,
}

impl<A: AnalogInput> Thermistor<A> {
    /// Create a driver for `adc` wired as described by `params`
    pub fn new(adc: A, params: ThermistorParams) -> Self {
        Self { adc, params }
    }

    /// Divider parameters
    pub fn params(&self) -> &ThermistorParams {
        &self.params
    }

    /// Release the analog input
    pub fn release(self) -> A {
        self.adc
    }
}

/// Convert a raw 16-bit divider reading to °C, `None` if it is unusable.
#[allow(clippy::arithmetic_side_effects)]
pub fn raw_to_celsius(raw: u16, params: &ThermistorParams) -> Option<f32> {
    if raw == 0 {
        return None;
    }
    let value = f32::from(raw);
    let series = params.series_resistance;

    let resistance = if params.high_side {
        // 10-bit equivalent of the reading
        let reading = value / 64.0;
        1023.0 * series / reading - series
    } else {
        series / (ADC_FULL_SCALE / value - 1.0)
    };
    if !resistance.is_finite() || resistance <= 0.0 {
        return None;
    }

    let inv_t = libm::logf(resistance / params.nominal_resistance) / params.b_coefficient
        + 1.0 / (params.nominal_temperature_c + KELVIN_OFFSET);
    let celsius = 1.0 / inv_t - KELVIN_OFFSET;
    celsius.is_finite().then_some(celsius)
}

impl<A: AnalogInput> TemperatureSensor for Thermistor<A> {
    type Error = ThermistorError<A::Error>;

    fn temperature(&mut self) -> Result<f32, Self::Error> {
        let raw = self.adc.read().map_err(ThermistorError::Adc)?;
        raw_to_celsius(raw, &self.params).ok_or(ThermistorError::OutOfRange(raw))
    }
}
