//! # luhn-core — Luhn Checksum Engine
//!
//! Validates identification numbers (payment card numbers and the like)
//! with the Luhn mod-10 checksum, and generates the check digit for a
//! partial number.
//!
//! ## Pipeline
//!
//! 1. **Normalize.** Spaces and dashes are removed; nothing else is touched
//!    ([`normalize`]).
//! 2. **Length policy.** A checked number needs at least [`MIN_LENGTH`]
//!    digits; a payload for generation needs at least one.
//! 3. **Digit gate.** Any remaining non-digit rejects the input. Only ASCII
//!    `0`-`9` carry values ([`DigitSequence`]).
//! 4. **Fold.** Right-to-left alternating-double summation, valid when the
//!    total is a multiple of ten.
//!
//! ## Entry Points
//!
//! - [`validate`] / [`generate`]: total functions returning `bool` and
//!   `Option<String>`.
//! - [`check`] / [`try_generate`]: the same operations returning a
//!   validated [`LuhnNumber`] or a [`LuhnError`] explaining the rejection.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No global or cached state; every function is reentrant and the public
//!   types are `Send + Sync`.
//! - String newtypes validate on construction and on deserialization.

/// Implement `Deserialize` for a newtype that must validate its contents.
/// Deserializes a plain `String`, then routes it through the given
/// constructor so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident, $ctor:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::$ctor(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod digits;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod number;

/// Fewer digits than this can never form a valid number: one digit cannot
/// be both payload and check digit.
pub const MIN_LENGTH: usize = 2;

// Re-export primary types for ergonomic imports.
pub use digits::DigitSequence;
pub use engine::{check, check_digit, generate, try_generate, validate};
pub use error::LuhnError;
pub use normalize::{is_decimal_digit, is_digit_string, is_separator, normalize, SEPARATORS};
pub use number::LuhnNumber;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<DigitSequence>();
        assert_send_sync::<LuhnNumber>();
        assert_send_sync::<LuhnError>();
    }
}
