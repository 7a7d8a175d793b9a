//! # Error Types
//!
//! Rejection reasons reported by the typed entry points
//! ([`crate::check`], [`crate::try_generate`], [`crate::LuhnNumber::new`]).
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The boolean/optional entry points ([`crate::validate`],
//! [`crate::generate`]) never surface these; they collapse every variant
//! into `false` / `None`.

use thiserror::Error;

/// Why an input could not be accepted as a Luhn digit sequence or number.
///
/// Character positions are zero-based `char` offsets into the *normalized*
/// text (spaces and dashes already removed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LuhnError {
    /// Nothing remained after stripping separators.
    #[error("input is empty after removing spaces and dashes")]
    Empty,

    /// Too few digits to carry both a payload and a check digit.
    #[error("expected at least {min} digits, got {len}", min = crate::MIN_LENGTH)]
    TooShort {
        /// Number of digits after normalization.
        len: usize,
    },

    /// A character that is not a decimal digit.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Position in the normalized text.
        position: usize,
    },

    /// A Unicode decimal digit (category `Nd`) outside ASCII `0`-`9`.
    #[error("unsupported numeral {ch:?} at position {position}; only ASCII digits are accepted")]
    UnsupportedNumeral {
        /// The offending character.
        ch: char,
        /// Position in the normalized text.
        position: usize,
    },

    /// The digits are well-formed but the final digit is wrong.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// The check digit that would satisfy the Luhn relation.
        expected: u8,
        /// The check digit actually present.
        found: u8,
    },
}

impl LuhnError {
    /// Short machine-friendly tag for the rejection reason.
    ///
    /// Used as a structured field in trace events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort { .. } => "too_short",
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::UnsupportedNumeral { .. } => "unsupported_numeral",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}
