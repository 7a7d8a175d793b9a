//! # Validated Luhn Numbers
//!
//! [`LuhnNumber`] is a digit string that is known to satisfy the Luhn
//! relation. It can only be obtained through [`LuhnNumber::new`] (or the
//! generator in [`crate::engine`]), so holding one is proof the check
//! already happened.
//!
//! The canonical storage form is the bare digit string with separators
//! stripped, in the same way identifier newtypes store their canonical
//! form and offer a formatted rendering on demand.

use serde::Serialize;

use crate::digits::DigitSequence;
use crate::error::LuhnError;
use crate::normalize::normalize;
use crate::MIN_LENGTH;

/// An identification number whose final digit is a correct Luhn check digit.
///
/// # Validation
///
/// - Spaces and dashes are ignored anywhere in the input
/// - At least [`MIN_LENGTH`] digits must remain
/// - Only ASCII digits are accepted
/// - The Luhn sum must be a multiple of ten
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LuhnNumber(String);

impl_validating_deserialize!(LuhnNumber, new);

impl LuhnNumber {
    /// Create a Luhn number from text, validating length, characters, and
    /// checksum in that order.
    ///
    /// # Errors
    ///
    /// - [`LuhnError::Empty`] / [`LuhnError::TooShort`] when fewer than
    ///   two characters remain after normalization
    /// - [`LuhnError::InvalidCharacter`] / [`LuhnError::UnsupportedNumeral`]
    ///   for the first non-digit
    /// - [`LuhnError::ChecksumMismatch`] when the check digit is wrong
    pub fn new(value: impl AsRef<str>) -> Result<Self, LuhnError> {
        let normalized = normalize(value.as_ref());

        let len = normalized.chars().count();
        if len == 0 {
            return Err(LuhnError::Empty);
        }
        if len < MIN_LENGTH {
            return Err(LuhnError::TooShort { len });
        }

        let digits = DigitSequence::from_normalized(&normalized)?;
        if !digits.satisfies_luhn() {
            let (found, payload) = digits.split_last().ok_or(LuhnError::TooShort { len })?;
            return Err(LuhnError::ChecksumMismatch {
                expected: payload.check_digit(),
                found,
            });
        }

        Ok(Self(normalized))
    }

    /// Wrap digits already known to satisfy the relation.
    pub(crate) fn from_checked(digits: &DigitSequence) -> Self {
        debug_assert!(digits.len() >= MIN_LENGTH && digits.satisfies_luhn());
        Self(digits.to_string())
    }

    /// The canonical digit string (no separators).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits, check digit included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a Luhn number has at least [`MIN_LENGTH`] digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every digit except the check digit.
    pub fn payload(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    /// The trailing check digit as a value in `0..=9`.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }

    /// The digits as a [`DigitSequence`].
    pub fn to_digits(&self) -> DigitSequence {
        DigitSequence::from(self)
    }

    /// Render the digits in space-separated groups of `group` characters,
    /// counted from the left (`4532 0151 1283 0366`).
    ///
    /// A `group` of zero returns the canonical string.
    pub fn formatted(&self, group: usize) -> String {
        if group == 0 {
            return self.0.clone();
        }
        let mut out = String::with_capacity(self.0.len() + self.0.len() / group);
        for (i, ch) in self.0.chars().enumerate() {
            if i > 0 && i % group == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }

    /// Consume the number, returning the canonical digit string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&LuhnNumber> for DigitSequence {
    fn from(number: &LuhnNumber) -> Self {
        DigitSequence::from_ascii_digits(number.as_str())
    }
}

impl From<LuhnNumber> for String {
    fn from(number: LuhnNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for LuhnNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LuhnNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LuhnNumber {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
