//! Analog input abstraction
//!
//! `embedded-hal` 1.0 has no ADC trait, so the board defines its own.
//! Readings are scaled to the full 16-bit range regardless of the converter's
//! native resolution (a 12-bit ADC reports `raw << 4`).

/// Analog input pin
pub trait AnalogInput {
    /// Error type
    type Error;

    /// Take one sample, scaled to `0..=u16::MAX`
    fn read(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        T::read(self)
    }
}
