//! LIS3DH register traffic, checked transaction by transaction.
// Integration test file: unwrap/panic are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::panic)]
//!
//! Run with: cargo test -p playground-hal --test lis3dh

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use playground_hal::lis3dh::*;
use playground_hal::{Accelerometer, Range, TapConfig, TapMode, TapTiming};

const ADDR: u8 = LIS3DH_I2C_ADDR_HIGH;

fn init_transactions() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write_read(ADDR, vec![REG_WHOAMI], vec![DEVICE_ID]),
        I2cTransaction::write(ADDR, vec![REG_CTRL5, CTRL5_BOOT]),
        I2cTransaction::write(ADDR, vec![REG_CTRL1, CTRL1_400HZ_XYZ]),
        I2cTransaction::write(ADDR, vec![REG_CTRL4, CTRL4_BDU_HR]),
        I2cTransaction::write(ADDR, vec![REG_TEMPCFG, TEMPCFG_ADC_EN]),
        I2cTransaction::write(ADDR, vec![REG_CTRL5, CTRL5_LIR_INT1]),
    ]
}

fn with_init(rest: Vec<I2cTransaction>) -> Vec<I2cTransaction> {
    let mut all = init_transactions();
    all.extend(rest);
    all
}

fn output_bytes(x: i16, y: i16, z: i16) -> Vec<u8> {
    [x, y, z].iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn single_tap() -> TapConfig {
    TapConfig {
        mode: TapMode::Single,
        timing: TapTiming {
            threshold: 90,
            time_limit: 4,
            time_latency: 50,
            time_window: 255,
        },
    }
}

#[test]
fn init_sequence() {
    let expectations = init_transactions();
    let i2c = I2cMock::new(&expectations);

    let accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    assert_eq!(accel.range(), Range::G2);

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn wrong_device_id_is_rejected() {
    let expectations = [I2cTransaction::write_read(ADDR, vec![REG_WHOAMI], vec![0x32])];
    let mut i2c = I2cMock::new(&expectations);

    let result = Lis3dh::new(i2c.clone(), NoopDelay::new(), ADDR);
    assert!(matches!(result, Err(Lis3dhError::UnknownDevice(0x32))));
    i2c.done();
}

#[test]
fn set_range_rewrites_full_scale_bits_only() {
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL4], vec![CTRL4_BDU_HR]),
        I2cTransaction::write(ADDR, vec![REG_CTRL4, 0xA8]),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_range(Range::G8).unwrap();
    assert_eq!(accel.range(), Range::G8);

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn single_tap_configuration() {
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL3], vec![0x00]),
        I2cTransaction::write(ADDR, vec![REG_CTRL3, CTRL3_I1_CLICK]),
        I2cTransaction::write(ADDR, vec![REG_CLICKCFG, CLICKCFG_SINGLE_XYZ]),
        I2cTransaction::write(ADDR, vec![REG_CLICKTHS, CLICKTHS_LIR | 90]),
        I2cTransaction::write(ADDR, vec![REG_TIMELIMIT, 4]),
        I2cTransaction::write(ADDR, vec![REG_TIMELATENCY, 50]),
        I2cTransaction::write(ADDR, vec![REG_TIMEWINDOW, 255]),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_tap(single_tap()).unwrap();

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn double_tap_uses_double_click_config() {
    let config = TapConfig {
        mode: TapMode::Double,
        timing: TapTiming {
            threshold: 60,
            time_limit: 10,
            time_latency: 50,
            time_window: 255,
        },
    };
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL3], vec![0x10]),
        I2cTransaction::write(ADDR, vec![REG_CTRL3, 0x10 | CTRL3_I1_CLICK]),
        I2cTransaction::write(ADDR, vec![REG_CLICKCFG, CLICKCFG_DOUBLE_XYZ]),
        I2cTransaction::write(ADDR, vec![REG_CLICKTHS, CLICKTHS_LIR | 60]),
        I2cTransaction::write(ADDR, vec![REG_TIMELIMIT, 10]),
        I2cTransaction::write(ADDR, vec![REG_TIMELATENCY, 50]),
        I2cTransaction::write(ADDR, vec![REG_TIMEWINDOW, 255]),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_tap(config).unwrap();

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn disabling_taps_clears_click_routing() {
    let config = TapConfig {
        mode: TapMode::Disabled,
        ..single_tap()
    };
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL3], vec![0x90]),
        I2cTransaction::write(ADDR, vec![REG_CTRL3, 0x10]),
        I2cTransaction::write(ADDR, vec![REG_CLICKCFG, 0x00]),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_tap(config).unwrap();

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn oversized_tap_threshold_touches_nothing() {
    let mut config = single_tap();
    config.timing.threshold = 128;
    let expectations = init_transactions();
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    assert!(matches!(
        accel.set_tap(config),
        Err(Lis3dhError::TapThreshold(128))
    ));

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn tapped_reads_click_source() {
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CLICKSRC], vec![0x41]),
        I2cTransaction::write_read(ADDR, vec![REG_CLICKSRC], vec![0x00]),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    assert!(accel.tapped().unwrap());
    assert!(!accel.tapped().unwrap());

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn idle_int1_skips_the_bus() {
    // Only the asserted read reaches CLICK_SRC.
    let expectations = with_init(vec![I2cTransaction::write_read(
        ADDR,
        vec![REG_CLICKSRC],
        vec![CLICKSRC_IA],
    )]);
    let i2c = I2cMock::new(&expectations);
    let pin_expectations = [
        PinTransaction::get(PinState::Low),
        PinTransaction::get(PinState::High),
    ];
    let int1 = PinMock::new(&pin_expectations);

    let mut accel = Lis3dh::with_int1(i2c, NoopDelay::new(), int1, ADDR).unwrap();
    assert!(!accel.tapped().unwrap());
    assert!(accel.tapped().unwrap());

    let (mut i2c, _, mut int1) = accel.release();
    i2c.done();
    int1.done();
}

#[test]
fn acceleration_scales_by_range() {
    let expectations = with_init(vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL4], vec![CTRL4_BDU_HR]),
        I2cTransaction::write(ADDR, vec![REG_CTRL4, 0xA8]),
        I2cTransaction::write_read(
            ADDR,
            vec![REG_OUT_X_L | AUTO_INCREMENT],
            output_bytes(4096, -4096, 0),
        ),
    ]);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_range(Range::G8).unwrap();
    let a = accel.acceleration().unwrap();
    assert!((a.x - 9.806).abs() < 1e-3, "x = {}", a.x);
    assert!((a.y + 9.806).abs() < 1e-3, "y = {}", a.y);
    assert!(a.z.abs() < 1e-6);

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}

#[test]
fn shake_averages_ten_samples() {
    let sample = I2cTransaction::write_read(
        ADDR,
        vec![REG_OUT_X_L | AUTO_INCREMENT],
        output_bytes(16_384, 0, 0),
    );
    let mut rest = vec![
        I2cTransaction::write_read(ADDR, vec![REG_CTRL4], vec![CTRL4_BDU_HR]),
        I2cTransaction::write(ADDR, vec![REG_CTRL4, 0xA8]),
    ];
    rest.extend(std::iter::repeat(sample).take(usize::from(SHAKE_SAMPLES)));
    let expectations = with_init(rest);
    let i2c = I2cMock::new(&expectations);

    let mut accel = Lis3dh::new(i2c, NoopDelay::new(), ADDR).unwrap();
    accel.set_range(Range::G8).unwrap();
    // 4 g ≈ 39.2 m/s²
    assert!(accel.shake(30.0).unwrap());

    let (mut i2c, _, _) = accel.release();
    i2c.done();
}
