//! Board configuration and hardware constants
//!
//! [`BoardConfig::default`] reproduces the Circuit Playground Express
//! behaviour. Everything here is plain data; nothing touches hardware.

use playground_hal::{Range, TapConfig, TapMode, TapTiming, ThermistorParams};

/// I²C address of the on-board LIS3DH (SDO tied high)
pub const ACCELEROMETER_ADDRESS: u8 = playground_hal::lis3dh::LIS3DH_I2C_ADDR_HIGH;

/// Number of NeoPixels in the ring
pub const PIXEL_COUNT: usize = 10;

/// On-board NTC thermistor (10 kΩ at 25 °C, B = 3950) on a 10 kΩ high-side divider
pub const THERMISTOR: ThermistorParams = ThermistorParams {
    nominal_resistance: 10_000.0,
    series_resistance: 10_000.0,
    nominal_temperature_c: 25.0,
    b_coefficient: 3950.0,
    high_side: true,
};

/// Upper end of the light scale
pub const LIGHT_SCALE: u32 = 330;

/// Raw photocell value that maps to [`LIGHT_SCALE`]
pub const LIGHT_FULL_SCALE: u32 = 65536;

/// Single-tap threshold and timing
pub const SINGLE_TAP: TapTiming = TapTiming {
    threshold: 90,
    time_limit: 4,
    time_latency: 50,
    time_window: 255,
};

/// Double-tap threshold and timing
pub const DOUBLE_TAP: TapTiming = TapTiming {
    threshold: 60,
    time_limit: 10,
    time_latency: 50,
    time_window: 255,
};

/// Shake threshold in m/s² used by [`crate::CircuitPlayground::shake`]
pub const DEFAULT_SHAKE_THRESHOLD: f32 = 30.0;

/// Construction-time board settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Accelerometer full-scale range
    pub range: Range,
    /// Tap mode applied at construction
    pub tap_mode: TapMode,
    /// Parameters for [`TapMode::Single`]
    pub single_tap: TapTiming,
    /// Parameters for [`TapMode::Double`]
    pub double_tap: TapTiming,
    /// Threshold used by `shake()` without an explicit one
    pub shake_threshold: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            range: Range::G8,
            tap_mode: TapMode::Single,
            single_tap: SINGLE_TAP,
            double_tap: DOUBLE_TAP,
            shake_threshold: DEFAULT_SHAKE_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// Set the accelerometer range
    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Set the tap mode applied at construction
    #[must_use]
    pub fn with_tap_mode(mut self, mode: TapMode) -> Self {
        self.tap_mode = mode;
        self
    }

    /// Override the single-tap parameters
    #[must_use]
    pub fn with_single_tap(mut self, timing: TapTiming) -> Self {
        self.single_tap = timing;
        self
    }

    /// Override the double-tap parameters
    #[must_use]
    pub fn with_double_tap(mut self, timing: TapTiming) -> Self {
        self.double_tap = timing;
        self
    }

    /// Set the default shake threshold
    #[must_use]
    pub fn with_shake_threshold(mut self, threshold: f32) -> Self {
        self.shake_threshold = threshold;
        self
    }

    /// Driver configuration for `mode`.
    ///
    /// `Disabled` carries the single-tap timing; the driver ignores it.
    pub fn tap_config(&self, mode: TapMode) -> TapConfig {
        let timing = match mode {
            TapMode::Double => self.double_tap,
            TapMode::Single | TapMode::Disabled => self.single_tap,
        };
        TapConfig { mode, timing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_express() {
        let config = BoardConfig::default();
        assert_eq!(config.range, Range::G8);
        assert_eq!(config.tap_mode, TapMode::Single);
        assert_eq!(config.shake_threshold, 30.0);
    }

    #[test]
    fn tap_config_picks_timing_by_mode() {
        let config = BoardConfig::default();
        let single = config.tap_config(TapMode::Single);
        assert_eq!(single.timing.threshold, 90);
        assert_eq!(single.timing.time_limit, 4);

        let double = config.tap_config(TapMode::Double);
        assert_eq!(double.timing.threshold, 60);
        assert_eq!(double.timing.time_limit, 10);
        assert_eq!(double.timing.time_latency, 50);
        assert_eq!(double.timing.time_window, 255);

        assert_eq!(config.tap_config(TapMode::Disabled).mode, TapMode::Disabled);
    }

    #[test]
    fn builder_overrides() {
        let config = BoardConfig::default()
            .with_range(Range::G2)
            .with_tap_mode(TapMode::Double)
            .with_shake_threshold(20.0);
        assert_eq!(config.range, Range::G2);
        assert_eq!(config.tap_mode, TapMode::Double);
        assert_eq!(config.shake_threshold, 20.0);
    }

    #[test]
    fn board_address_is_sdo_high() {
        assert_eq!(ACCELEROMETER_ADDRESS, 0x19);
    }
}
