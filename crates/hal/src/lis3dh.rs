//! LIS3DH triple-axis accelerometer over I²C.
//!
//! Reference: ST LIS3DH datasheet DocID17530 Rev 2, Section 8 (Register map).
//!
//! The Circuit Playground wires SDO high, so the board address is `0x19`;
//! breakouts default to `0x18`. INT1 is optionally routed to a GPIO so
//! [`Lis3dh::tapped`] can skip the bus transaction when no click is latched.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, ErrorType, InputPin};
use embedded_hal::i2c::I2c;
use thiserror_no_std::Error;

use crate::accel::{
    Acceleration, Accelerometer, Range, TapConfig, TapMode, STANDARD_GRAVITY,
};

/// 7-bit I²C address with SDO pulled low.
pub const LIS3DH_I2C_ADDR_LOW: u8 = 0x18;
/// 7-bit I²C address with SDO pulled high.
pub const LIS3DH_I2C_ADDR_HIGH: u8 = 0x19;

/// WHO_AM_I: device identification, reads [`DEVICE_ID`].
pub const REG_WHOAMI: u8 = 0x0F;
/// TEMP_CFG_REG: ADC and temperature sensor enable.
pub const REG_TEMPCFG: u8 = 0x1F;
/// CTRL_REG1: data rate, low-power mode, axis enables.
pub const REG_CTRL1: u8 = 0x20;
/// CTRL_REG3: INT1 routing (I1_CLICK is bit 7).
pub const REG_CTRL3: u8 = 0x22;
/// CTRL_REG4: BDU, full-scale selection, high resolution.
pub const REG_CTRL4: u8 = 0x23;
/// CTRL_REG5: reboot memory, INT1 latch.
pub const REG_CTRL5: u8 = 0x24;
/// OUT_X_L: first of six output bytes (X, Y, Z little-endian).
pub const REG_OUT_X_L: u8 = 0x28;
/// CLICK_CFG: per-axis single/double click enables.
pub const REG_CLICKCFG: u8 = 0x38;
/// CLICK_SRC: click status, IA is bit 6. Reading clears the latch.
pub const REG_CLICKSRC: u8 = 0x39;
/// CLICK_THS: click threshold (bit 7 = LIR_Click).
pub const REG_CLICKTHS: u8 = 0x3A;
/// TIME_LIMIT: maximum click duration.
pub const REG_TIMELIMIT: u8 = 0x3B;
/// TIME_LATENCY: dead time after the first click.
pub const REG_TIMELATENCY: u8 = 0x3C;
/// TIME_WINDOW: second-click window.
pub const REG_TIMEWINDOW: u8 = 0x3D;

/// Expected WHO_AM_I value.
pub const DEVICE_ID: u8 = 0x33;
/// Sub-address bit 7: auto-increment for multi-byte reads.
pub const AUTO_INCREMENT: u8 = 0x80;
/// CTRL_REG1: 400 Hz ODR (0b0111 << 4), normal mode, X/Y/Z enabled.
pub const CTRL1_400HZ_XYZ: u8 = 0x77;
/// CTRL_REG4: block data update + high resolution, ±2 g.
pub const CTRL4_BDU_HR: u8 = 0x88;
/// CTRL_REG4 full-scale field mask (FS[1:0], bits 5:4).
pub const CTRL4_FS_MASK: u8 = 0x30;
/// CTRL_REG5: reboot memory content.
pub const CTRL5_BOOT: u8 = 0x80;
/// CTRL_REG5: latch INT1 until INT1_SRC is read.
pub const CTRL5_LIR_INT1: u8 = 0x08;
/// TEMP_CFG_REG: enable the auxiliary ADC.
pub const TEMPCFG_ADC_EN: u8 = 0x80;
/// CTRL_REG3: route click interrupt to INT1.
pub const CTRL3_I1_CLICK: u8 = 0x80;
/// CLICK_CFG: single click on X, Y and Z.
pub const CLICKCFG_SINGLE_XYZ: u8 = 0x15;
/// CLICK_CFG: double click on X, Y and Z.
pub const CLICKCFG_DOUBLE_XYZ: u8 = 0x2A;
/// CLICK_THS: latch the click interrupt.
pub const CLICKTHS_LIR: u8 = 0x80;
/// CLICK_SRC: interrupt active.
pub const CLICKSRC_IA: u8 = 0x40;
/// Largest value accepted by CLICK_THS (7 bits).
pub const MAX_CLICK_THRESHOLD: u8 = 127;

/// Samples averaged by [`Lis3dh::shake`].
pub const SHAKE_SAMPLES: u8 = 10;
/// Delay between shake samples (10 × 10 ms = 100 ms total).
pub const SHAKE_SAMPLE_INTERVAL_MS: u32 = 10;
/// Time the chip needs to reload trimming values after a reboot.
const BOOT_DELAY_MS: u32 = 10;

/// Register value of a [`Range`] in CTRL_REG4 FS[1:0].
const fn range_bits(range: Range) -> u8 {
    match range {
        Range::G2 => 0b00,
        Range::G4 => 0b01,
        Range::G8 => 0b10,
        Range::G16 => 0b11,
    }
}

/// Raw counts per g for a left-justified 16-bit output at `range`.
const fn counts_per_g(range: Range) -> f32 {
    match range {
        Range::G2 => 16380.0,
        Range::G4 => 8190.0,
        Range::G8 => 4096.0,
        Range::G16 => 1365.0,
    }
}

/// LIS3DH driver errors
#[derive(Debug, Error)]
pub enum Lis3dhError<E> {
    /// Bus transaction failed
    #[error("LIS3DH I2C transaction failed")]
    I2c(E),
    /// WHO_AM_I did not match
    #[error("no LIS3DH found (WHO_AM_I = {0:#04x})")]
    UnknownDevice(u8),
    /// Tap threshold does not fit CLICK_THS
    #[error("tap threshold {0} out of range (0-127)")]
    TapThreshold(u8),
    /// INT1 line could not be read
    #[error("LIS3DH INT1 pin read failed")]
    Interrupt(ErrorKind),
}

/// Placeholder for a board without INT1 wiring.
///
/// Always reads high so [`Lis3dh::tapped`] falls through to CLICK_SRC.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

/// LIS3DH accelerometer driver
pub struct Lis3dh<I, D, P = NoPin> {
    i2c: I,
    delay: D,
    int1: P,
    address: u8,
    range: Range,
}

impl<I: I2c, D: DelayNs> Lis3dh<I, D, NoPin> {
    /// Probe and initialise the chip at `address` without an INT1 pin.
    pub fn new(i2c: I, delay: D, address: u8) -> Result<Self, Lis3dhError<I::Error>> {
        Self::with_int1(i2c, delay, NoPin, address)
    }
}

impl<I: I2c, D: DelayNs, P: InputPin> Lis3dh<I, D, P> {
    /// Probe and initialise the chip at `address`, watching `int1` for clicks.
    ///
    /// Sequence: check WHO_AM_I, reboot, 400 Hz with all axes, BDU + high
    /// resolution at ±2 g, enable ADC, latch INT1.
    pub fn with_int1(
        i2c: I,
        delay: D,
        int1: P,
        address: u8,
    ) -> Result<Self, Lis3dhError<I::Error>> {
        let mut this = Self {
            i2c,
            delay,
            int1,
            address,
            range: Range::G2,
        };

        let id = this.read_reg(REG_WHOAMI)?;
        if id != DEVICE_ID {
            warn!("LIS3DH probe at {} read id {}", address, id);
            return Err(Lis3dhError::UnknownDevice(id));
        }

        this.write_reg(REG_CTRL5, CTRL5_BOOT)?;
        this.delay.delay_ms(BOOT_DELAY_MS);
        this.write_reg(REG_CTRL1, CTRL1_400HZ_XYZ)?;
        this.write_reg(REG_CTRL4, CTRL4_BDU_HR)?;
        this.write_reg(REG_TEMPCFG, TEMPCFG_ADC_EN)?;
        this.write_reg(REG_CTRL5, CTRL5_LIR_INT1)?;

        info!("LIS3DH ready at {}", address);
        Ok(this)
    }

    /// Currently selected range
    pub fn range(&self) -> Range {
        self.range
    }

    /// Release the bus, delay and INT1 pin
    pub fn release(self) -> (I, D, P) {
        (self.i2c, self.delay, self.int1)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Lis3dhError<I::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Lis3dhError::I2c)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, Lis3dhError<I::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Lis3dhError::I2c)?;
        let [value] = buf;
        Ok(value)
    }
}

impl<I: I2c, D: DelayNs, P: InputPin> Accelerometer for Lis3dh<I, D, P> {
    type Error = Lis3dhError<I::Error>;

    #[allow(clippy::arithmetic_side_effects)]
    fn set_range(&mut self, range: Range) -> Result<(), Self::Error> {
        let ctrl4 = self.read_reg(REG_CTRL4)?;
        let ctrl4 = (ctrl4 & !CTRL4_FS_MASK) | (range_bits(range) << 4);
        self.write_reg(REG_CTRL4, ctrl4)?;
        self.range = range;
        debug!("LIS3DH range {}", range.name());
        Ok(())
    }

    fn set_tap(&mut self, config: TapConfig) -> Result<(), Self::Error> {
        let timing = config.timing;
        if config.mode != TapMode::Disabled && timing.threshold > MAX_CLICK_THRESHOLD {
            return Err(Lis3dhError::TapThreshold(timing.threshold));
        }

        let ctrl3 = self.read_reg(REG_CTRL3)?;
        let click_cfg = match config.mode {
            TapMode::Disabled => {
                self.write_reg(REG_CTRL3, ctrl3 & !CTRL3_I1_CLICK)?;
                self.write_reg(REG_CLICKCFG, 0)?;
                debug!("LIS3DH tap detection off");
                return Ok(());
            }
            TapMode::Single => CLICKCFG_SINGLE_XYZ,
            TapMode::Double => CLICKCFG_DOUBLE_XYZ,
        };

        self.write_reg(REG_CTRL3, ctrl3 | CTRL3_I1_CLICK)?;
        self.write_reg(REG_CLICKCFG, click_cfg)?;
        self.write_reg(REG_CLICKTHS, CLICKTHS_LIR | timing.threshold)?;
        self.write_reg(REG_TIMELIMIT, timing.time_limit)?;
        self.write_reg(REG_TIMELATENCY, timing.time_latency)?;
        self.write_reg(REG_TIMEWINDOW, timing.time_window)?;
        debug!(
            "LIS3DH tap {} threshold {}",
            config.mode.name(),
            timing.threshold
        );
        Ok(())
    }

    fn tapped(&mut self) -> Result<bool, Self::Error> {
        let asserted = self
            .int1
            .is_high()
            .map_err(|e| Lis3dhError::Interrupt(e.kind()))?;
        if !asserted {
            return Ok(false);
        }
        Ok(self.read_reg(REG_CLICKSRC)? & CLICKSRC_IA != 0)
    }

    #[allow(clippy::arithmetic_side_effects)]
    fn acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_OUT_X_L | AUTO_INCREMENT], &mut buf)
            .map_err(Lis3dhError::I2c)?;

        let scale = STANDARD_GRAVITY / counts_per_g(self.range);
        let axis = |lo: u8, hi: u8| f32::from(i16::from_le_bytes([lo, hi])) * scale;
        let [xl, xh, yl, yh, zl, zh] = buf;
        Ok(Acceleration::new(axis(xl, xh), axis(yl, yh), axis(zl, zh)))
    }

    #[allow(clippy::arithmetic_side_effects)]
    fn shake(&mut self, threshold: f32) -> Result<bool, Self::Error> {
        let mut sum = Acceleration::default();
        for _ in 0..SHAKE_SAMPLES {
            let a = self.acceleration()?;
            sum.x += a.x;
            sum.y += a.y;
            sum.z += a.z;
            self.delay.delay_ms(SHAKE_SAMPLE_INTERVAL_MS);
        }
        let n = f32::from(SHAKE_SAMPLES);
        let avg = Acceleration::new(sum.x / n, sum.y / n, sum.z / n);
        trace!("LIS3DH shake magnitude {}", avg.magnitude());
        Ok(avg.magnitude() > threshold)
    }
}
