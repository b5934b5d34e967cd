//! Property-based tests for the debouncer, thermistor math and colours.

use playground_hal::thermistor::raw_to_celsius;
use playground_hal::{color_from_hex, GamePad, RgbColor, ThermistorParams};

const NTC_10K: ThermistorParams = ThermistorParams {
    nominal_resistance: 10_000.0,
    series_resistance: 10_000.0,
    nominal_temperature_c: 25.0,
    b_coefficient: 3950.0,
    high_side: true,
};

proptest::proptest! {
    /// A bit is only latched if it was high on two consecutive samples.
    #[test]
    fn gamepad_latches_only_stable_bits(samples in proptest::collection::vec(0u8..=255u8, 0..32)) {
        let mut pad = GamePad::new();
        let mut stable = 0u8;
        let mut prev = 0u8;
        for s in &samples {
            pad.tick(*s);
            stable |= prev & s;
            prev = *s;
        }
        let pressed = pad.take_pressed();
        assert_eq!(pressed, stable, "samples {:?}", samples);
    }

    /// After a poll only the still-held bits remain latched.
    #[test]
    fn gamepad_rearms_with_held_bits(a in 0u8..=255u8, b in 0u8..=255u8) {
        let mut pad = GamePad::new();
        pad.tick(a);
        pad.tick(b);
        let _ = pad.take_pressed();
        assert_eq!(pad.take_pressed(), b);
    }

    /// Any non-zero reading either converts to a finite temperature or is rejected.
    #[test]
    fn thermistor_never_returns_nan(raw in 0u16..=u16::MAX) {
        if let Some(t) = raw_to_celsius(raw, &NTC_10K) {
            assert!(t.is_finite(), "raw {} gave {}", raw, t);
        }
    }

    /// Higher high-side reading means lower resistance means warmer.
    #[test]
    fn thermistor_is_monotone(a in 1_000u16..60_000u16, b in 1_000u16..60_000u16) {
        let ta = raw_to_celsius(a, &NTC_10K);
        let tb = raw_to_celsius(b, &NTC_10K);
        if let (Some(ta), Some(tb)) = (ta, tb) {
            if a > b {
                assert!(ta >= tb, "raw {} → {} should be >= raw {} → {}", a, ta, b, tb);
            }
        }
    }

    /// Hex colours keep their low three bytes as R, G, B.
    #[test]
    fn hex_colour_channels(hex in 0u32..=u32::MAX) {
        let c = color_from_hex(hex);
        let [_, r, g, b] = hex.to_be_bytes();
        assert_eq!((c.r(), c.g(), c.b()), (r, g, b));
    }
}
