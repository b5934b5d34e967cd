//! Accelerometer abstraction
//!
//! Covers what the board exposes: full-scale range, tap (click) detection,
//! acceleration in m/s² and a shake test on the averaged magnitude.

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.806;

/// Full-scale measurement range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
    /// ±2 g
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl Range {
    /// Human-readable name for log output
    pub const fn name(self) -> &'static str {
        match self {
            Self::G2 => "2G",
            Self::G4 => "4G",
            Self::G8 => "8G",
            Self::G16 => "16G",
        }
    }
}

/// Tap detection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapMode {
    /// Click interrupt off
    Disabled,
    /// Single sharp jolt
    #[default]
    Single,
    /// Two jolts in quick succession
    Double,
}

impl TapMode {
    /// Numeric form used by the board's scripting API (0, 1, 2).
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Single => 1,
            Self::Double => 2,
        }
    }

    /// Parse the numeric form; `None` for anything but 0, 1 or 2.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Disabled),
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            _ => None,
        }
    }

    /// Human-readable name for log output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

/// Click threshold and timing windows, in the accelerometer's native units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapTiming {
    /// Click threshold (0..=127, scaled by the current range)
    pub threshold: u8,
    /// Maximum click duration, in ODR periods
    pub time_limit: u8,
    /// Dead time after the first click, in ODR periods
    pub time_latency: u8,
    /// Window in which a second click must start, in ODR periods
    pub time_window: u8,
}

/// Complete tap configuration handed to [`Accelerometer::set_tap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapConfig {
    /// Detection mode
    pub mode: TapMode,
    /// Threshold and timing (ignored when `mode` is `Disabled`)
    pub timing: TapTiming,
}

/// Acceleration sample in m/s²
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    /// X axis
    pub x: f32,
    /// Y axis
    pub y: f32,
    /// Z axis
    pub z: f32,
}

impl Acceleration {
    /// Construct from components
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the vector
    #[allow(clippy::arithmetic_side_effects)]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<Acceleration> for (f32, f32, f32) {
    fn from(a: Acceleration) -> Self {
        (a.x, a.y, a.z)
    }
}

/// Accelerometer driver capability
pub trait Accelerometer {
    /// Error type
    type Error;

    /// Select the full-scale range
    fn set_range(&mut self, range: Range) -> Result<(), Self::Error>;

    /// Configure (or disable) tap detection
    fn set_tap(&mut self, config: TapConfig) -> Result<(), Self::Error>;

    /// Whether a tap occurred since the last call. Edge-triggered: each
    /// physical tap reports `true` at most once.
    fn tapped(&mut self) -> Result<bool, Self::Error>;

    /// Current acceleration
    fn acceleration(&mut self) -> Result<Acceleration, Self::Error>;

    /// Whether the averaged acceleration magnitude exceeds `threshold` (m/s²).
    ///
    /// A board at rest reads about 9.8, so thresholds below ~10 always
    /// report a shake.
    fn shake(&mut self, threshold: f32) -> Result<bool, Self::Error>;
}
