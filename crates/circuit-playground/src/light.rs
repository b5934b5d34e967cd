//! Photocell scaling

use crate::config::{LIGHT_FULL_SCALE, LIGHT_SCALE};

/// Map a raw photocell reading onto `0..=330`.
///
/// Integer arithmetic, truncating: `65536` maps to `330`, `0` to `0`.
#[allow(clippy::arithmetic_side_effects)] // divisor is a non-zero constant
pub fn light_from_raw(raw: u32) -> u32 {
    let scaled = u64::from(raw).saturating_mul(u64::from(LIGHT_SCALE))
        / u64::from(LIGHT_FULL_SCALE);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
