//! Facade-level errors

use thiserror_no_std::Error;

/// Errors raised by the board facade itself.
///
/// Driver failures pass through unchanged inside [`Error::Driver`].
#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Touch slot outside 1..=7
    #[error("touch slot {0} does not exist (valid: 1-7)")]
    InvalidTouchSlot(usize),
    /// Numeric tap mode other than 0, 1 or 2
    #[error("tap mode {0} is invalid (valid: 0-2)")]
    InvalidTapMode(u8),
    /// Underlying driver failed
    #[error("peripheral driver error")]
    Driver(E),
}
