//! Core value types shared by the input and display paths.

use crate::config::DIGIT_MAX;

/// The digit currently selected for display.
///
/// Always within `0..=9`. The only way to move it is through the saturating
/// [`incremented`](Digit::incremented) and [`decremented`](Digit::decremented)
/// steps, so font lookups can never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// The digit shown after every reset.
    pub const ZERO: Digit = Digit(0);

    /// The largest displayable digit.
    pub const MAX: Digit = Digit(DIGIT_MAX);

    /// Creates a digit, rejecting values above 9.
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value > DIGIT_MAX {
            Err(DigitError::OutOfRange(value))
        } else {
            Ok(Digit(value))
        }
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the next digit, staying at 9.
    #[inline]
    pub const fn incremented(self) -> Self {
        if self.0 < DIGIT_MAX {
            Digit(self.0 + 1)
        } else {
            self
        }
    }

    /// Returns the previous digit, staying at 0.
    #[inline]
    pub const fn decremented(self) -> Self {
        Digit(self.0.saturating_sub(1))
    }

    /// Index into the font table.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two digit buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Steps the digit up, saturating at 9.
    Increment,

    /// Steps the digit down, saturating at 0.
    Decrement,
}

impl Button {
    /// Applies this button's step to `digit`.
    #[inline]
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Button::Increment => digit.incremented(),
            Button::Decrement => digit.decremented(),
        }
    }
}

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value does not fit on a single-digit display.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "digit {} is out of range 0-{}", value, DIGIT_MAX)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}
