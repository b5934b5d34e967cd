//! Capacitive touch abstraction

/// Touch-capable pads on the board edge.
///
/// A0 is the speaker DAC and cannot sense touch, so there is no `A0`.
/// `Tx` is labelled A7 on the Express silkscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPin {
    /// Pad A1
    A1,
    /// Pad A2
    A2,
    /// Pad A3
    A3,
    /// Pad A4
    A4,
    /// Pad A5
    A5,
    /// Pad A6
    A6,
    /// Pad TX (A7)
    Tx,
}

impl TouchPin {
    /// All pads, in slot order
    pub const ALL: [TouchPin; 7] = [
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::Tx,
    ];

    /// Slot number as printed on the board (A1 = 1 .. TX = 7)
    pub const fn slot(self) -> usize {
        match self {
            Self::A1 => 1,
            Self::A2 => 2,
            Self::A3 => 3,
            Self::A4 => 4,
            Self::A5 => 5,
            Self::A6 => 6,
            Self::Tx => 7,
        }
    }

    /// Pad for a slot number; `None` for 0 and anything above 7
    pub const fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            1 => Some(Self::A1),
            2 => Some(Self::A2),
            3 => Some(Self::A3),
            4 => Some(Self::A4),
            5 => Some(Self::A5),
            6 => Some(Self::A6),
            7 => Some(Self::Tx),
            _ => None,
        }
    }

    /// Silkscreen name
    pub const fn name(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::A6 => "A6",
            Self::Tx => "TX",
        }
    }
}

/// A pad bound to the touch peripheral
pub trait TouchSensor {
    /// Error type
    type Error;

    /// Whether the pad currently reads above its threshold
    fn is_touched(&mut self) -> Result<bool, Self::Error>;

    /// Raw-count threshold above which the pad reads as touched
    fn threshold(&self) -> u16;

    /// Replace the threshold
    fn set_threshold(&mut self, threshold: u16);
}

/// Allocates touch sensors for pads.
///
/// Binding claims a hardware channel and calibrates the pad's baseline, so
/// callers should bind lazily and only once per pad.
pub trait TouchController {
    /// Error type, shared with the sensors it produces
    type Error;

    /// Sensor handle type
    type Sensor: TouchSensor<Error = Self::Error>;

    /// Claim `pin` for touch sensing
    fn bind(&mut self, pin: TouchPin) -> Result<Self::Sensor, Self::Error>;
}
