//! # Checksum Engine
//!
//! The public validate/generate operations. Each one runs the same
//! pipeline: normalize, apply the length policy, gate on digit class,
//! then fold.
//!
//! Every function here is pure and reentrant. Rejections are reported as
//! `trace`-level events; nothing is logged on success.

use crate::digits::DigitSequence;
use crate::error::LuhnError;
use crate::normalize::normalize;
use crate::number::LuhnNumber;

/// Whether `input` is a valid Luhn number.
///
/// Spaces and dashes are ignored. Fewer than two digits, or any other
/// non-digit character, is always invalid. Never fails.
///
/// ```
/// assert!(luhn_core::validate("4532 0151 1283 0366"));
/// assert!(!luhn_core::validate("1234567890123456"));
/// assert!(!luhn_core::validate("5"));
/// ```
pub fn validate(input: &str) -> bool {
    check(input).is_ok()
}

/// Validate `input`, returning the canonical number or the reason it was
/// rejected.
///
/// `validate(x)` is exactly `check(x).is_ok()`.
///
/// # Errors
///
/// See [`LuhnNumber::new`].
pub fn check(input: &str) -> Result<LuhnNumber, LuhnError> {
    LuhnNumber::new(input).map_err(|e| {
        tracing::trace!(reason = e.kind(), error = %e, "luhn check rejected input");
        e
    })
}

/// Append the correct check digit to a partial number.
///
/// Returns `None` when nothing remains after removing spaces and dashes,
/// or when any other non-digit is present. The result always passes
/// [`validate`] and is one digit longer than the cleaned input.
///
/// ```
/// assert_eq!(
///     luhn_core::generate("4532 0151 1283 036").as_deref(),
///     Some("4532015112830366")
/// );
/// assert_eq!(luhn_core::generate("4532a151"), None);
/// ```
pub fn generate(input: &str) -> Option<String> {
    try_generate(input).ok().map(String::from)
}

/// Like [`generate`] but reports why the input was rejected.
///
/// # Errors
///
/// - [`LuhnError::Empty`] when nothing remains after normalization
/// - [`LuhnError::InvalidCharacter`] / [`LuhnError::UnsupportedNumeral`]
///   for the first non-digit
pub fn try_generate(input: &str) -> Result<LuhnNumber, LuhnError> {
    let payload = payload_digits(input)?;
    Ok(LuhnNumber::from_checked(&payload.with_check_digit()))
}

/// Just the check digit that [`generate`] would append.
///
/// ```
/// assert_eq!(luhn_core::check_digit("7992739871"), Some(3));
/// assert_eq!(luhn_core::check_digit(""), None);
/// ```
pub fn check_digit(input: &str) -> Option<u8> {
    payload_digits(input).ok().map(|d| d.check_digit())
}

/// Normalize and convert a payload; empty payloads are rejected.
fn payload_digits(input: &str) -> Result<DigitSequence, LuhnError> {
    let normalized = normalize(input);
    let result = if normalized.is_empty() {
        Err(LuhnError::Empty)
    } else {
        DigitSequence::from_normalized(&normalized)
    };
    result.map_err(|e| {
        tracing::trace!(reason = e.kind(), error = %e, "luhn generate rejected input");
        e
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Interleave separators between the characters of `digits`.
    fn decorate(digits: &str, separators: &[String]) -> String {
        let mut out = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if let Some(sep) = separators.get(i) {
                out.push_str(sep);
            }
            out.push(ch);
        }
        if let Some(sep) = separators.last() {
            out.push_str(sep);
        }
        out
    }

    proptest! {
        /// Repeated calls agree.
        #[test]
        fn validate_deterministic(input in ".{0,40}") {
            prop_assert_eq!(validate(&input), validate(&input));
        }

        /// Spaces and dashes anywhere never change the verdict.
        #[test]
        fn validate_formatting_transparent(
            digits in "[0-9]{0,24}",
            separators in prop::collection::vec("[ -]{0,3}", 0..26),
        ) {
            let decorated = decorate(&digits, &separators);
            prop_assert_eq!(validate(&decorated), validate(&digits));
        }

        /// One digit or fewer is never valid.
        #[test]
        fn validate_minimum_length(digit in "[0-9]?", padding in "[ -]{0,6}") {
            let input = format!("{padding}{digit}{padding}");
            prop_assert!(!validate(&input));
        }

        /// A non-separator non-digit anywhere makes the input invalid.
        #[test]
        fn validate_character_gate(
            prefix in "[0-9]{0,12}",
            bad in "[^0-9 \\-]",
            suffix in "[0-9]{0,12}",
        ) {
            let input = format!("{prefix}{bad}{suffix}");
            prop_assert!(!validate(&input));
            prop_assert_eq!(generate(&input), None);
        }

        /// Generated numbers always validate and are one digit longer.
        #[test]
        fn generate_roundtrip(digits in "[0-9]{1,40}") {
            let generated = generate(&digits).unwrap();
            prop_assert!(validate(&generated));
            prop_assert_eq!(generated.len(), digits.len() + 1);
            prop_assert!(generated.starts_with(digits.as_str()));
        }

        /// `check` succeeds exactly when `validate` says so.
        #[test]
        fn check_matches_validate(input in "[0-9a -]{0,24}") {
            prop_assert_eq!(check(&input).is_ok(), validate(&input));
        }
    }
}
