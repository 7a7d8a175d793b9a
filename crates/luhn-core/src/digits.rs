//! # Digit Sequences and the Luhn Fold
//!
//! [`DigitSequence`] is the only value the checksum arithmetic ever sees.
//! Every element is a value in `0..=9`, so the summation never has to
//! re-check its input.
//!
//! ## Processing Order
//!
//! Digits are folded right to left. For a complete number the rightmost
//! digit (the check digit) is never doubled; for a payload awaiting its
//! check digit the doubling starts on the rightmost digit instead, because
//! every payload digit sits one position further left once the check digit
//! is appended.

use serde::{Serialize, Serializer};

use crate::error::LuhnError;
use crate::normalize::{is_decimal_digit, normalize};

/// An ordered sequence of decimal digit values.
///
/// No minimum length is enforced here; an empty sequence is representable.
/// Length policy belongs to [`crate::LuhnNumber`] and the public operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

impl_validating_deserialize!(DigitSequence, parse);

impl DigitSequence {
    /// Normalize `input` and convert every remaining character to a digit.
    ///
    /// # Errors
    ///
    /// Returns [`LuhnError::InvalidCharacter`] for the first non-digit, or
    /// [`LuhnError::UnsupportedNumeral`] for a Unicode decimal digit outside
    /// ASCII `0`-`9`. An empty result is not an error.
    pub fn parse(input: &str) -> Result<Self, LuhnError> {
        Self::from_normalized(&normalize(input))
    }

    /// Convert already-normalized text. Separators are not skipped here.
    pub(crate) fn from_normalized(s: &str) -> Result<Self, LuhnError> {
        let mut digits = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None if is_decimal_digit(ch) => {
                    return Err(LuhnError::UnsupportedNumeral { ch, position })
                }
                None => return Err(LuhnError::InvalidCharacter { ch, position }),
            }
        }
        Ok(Self(digits))
    }

    /// Convert canonical ASCII digit text. The caller guarantees every byte
    /// is in `b'0'..=b'9'`.
    pub(crate) fn from_ascii_digits(s: &str) -> Self {
        debug_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        Self(s.bytes().map(|b| b - b'0').collect())
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no digits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digit values, leftmost first.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    /// Iterate over digit values, leftmost first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Luhn sum of the sequence treated as a complete number.
    ///
    /// The rightmost digit is undoubled, the next one doubled, and so on.
    pub fn luhn_sum(&self) -> u64 {
        fold(self.iter().rev(), false)
    }

    /// Whether the sequence, read as a complete number, satisfies the
    /// Luhn relation (`sum mod 10 == 0`).
    ///
    /// An empty sequence sums to zero and therefore passes; callers that
    /// care about length check it first.
    pub fn satisfies_luhn(&self) -> bool {
        self.luhn_sum() % 10 == 0
    }

    /// The digit that, appended to this sequence, satisfies the relation.
    ///
    /// Always in `0..=9`; a payload whose sum is already a multiple of ten
    /// gets `0`, never `10`.
    pub fn check_digit(&self) -> u8 {
        let sum = fold(self.iter().rev(), true);
        ((10 - sum % 10) % 10) as u8
    }

    /// A new sequence with [`check_digit`](Self::check_digit) appended.
    pub fn with_check_digit(&self) -> Self {
        let mut digits = Vec::with_capacity(self.0.len() + 1);
        digits.extend_from_slice(&self.0);
        digits.push(self.check_digit());
        Self(digits)
    }

    /// Split into payload and trailing digit. `None` when empty.
    pub fn split_last(&self) -> Option<(u8, DigitSequence)> {
        let (last, rest) = self.0.split_last()?;
        Some((*last, Self(rest.to_vec())))
    }
}

/// Right-to-left alternating-double summation.
///
/// `double_first` selects whether the first digit yielded by `digits`
/// (the rightmost one) is doubled.
fn fold(digits: impl Iterator<Item = u8>, double_first: bool) -> u64 {
    let mut sum = 0u64;
    let mut double = double_first;
    for d in digits {
        let mut value = u64::from(d);
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }
    sum
}

impl std::fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DigitSequence {
    type Err = LuhnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DigitSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
