//! Buttons A and B and the set reported by the debounced poller

/// One of the two push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Left button (D4)
    A,
    /// Right button (D5)
    B,
}

impl Button {
    /// Both buttons, in bit order
    pub const ALL: [Button; 2] = [Self::A, Self::B];

    /// Bit in the poller mask
    pub const fn mask(self) -> u8 {
        match self {
            Self::A => 0x01,
            Self::B => 0x02,
        }
    }

    /// Silkscreen name
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// Buttons pressed since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    const VALID: u8 = 0x03;

    /// No buttons
    pub const EMPTY: Self = Self(0);

    /// Decode a poller bitmask (bit 0 = A, bit 1 = B); other bits are ignored
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & Self::VALID)
    }

    /// Bitmask form
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `button` is in the set
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Whether no button is in the set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of buttons in the set
    pub const fn len(self) -> usize {
        // At most two bits are ever set.
        match self.0 {
            0 => 0,
            Self::VALID => 2,
            _ => 1,
        }
    }

    /// Buttons in the set, A before B
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl From<Button> for ButtonSet {
    fn from(button: Button) -> Self {
        Self(button.mask())
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<T: IntoIterator<Item = Button>>(iter: T) -> Self {
        Self(iter.into_iter().fold(0, |mask, b| mask | b.mask()))
    }
}
