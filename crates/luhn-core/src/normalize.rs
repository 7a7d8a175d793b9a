//! # Input Normalization and Digit Classification
//!
//! The first two stages of the checksum pipeline: separator stripping and
//! the character-class gate. Both are total functions; neither enforces a
//! length policy.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters treated as formatting and removed before any other check.
///
/// Nothing else is special: tabs, dots, and other whitespace survive
/// normalization and are later rejected by the digit gate.
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// Whether `c` is a formatting separator.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Remove every space and dash from `input`.
///
/// All other characters, including letters and punctuation, are preserved
/// verbatim and in order. Input made only of separators yields `""`.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !is_separator(*c)).collect()
}

/// Whether `c` is a decimal digit (Unicode category `Nd`).
///
/// Non-ASCII decimal digits pass here and are turned away later when digits
/// are converted to values. Fractions, superscripts, and letter-like
/// numerals (`½`, `²`, `Ⅷ`) are not decimal digits.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Whether every character of `s` is a decimal digit.
///
/// The empty string is accepted; length policy belongs to the caller.
pub fn is_digit_string(s: &str) -> bool {
    s.chars().all(is_decimal_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_dashes() {
        assert_eq!(normalize("4532 0151-1283 0366"), "4532015112830366");
        assert_eq!(normalize("  12--34  "), "1234");
    }

    #[test]
    fn all_separators_become_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("---"), "");
        assert_eq!(normalize(" - - "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn other_characters_preserved() {
        assert_eq!(normalize("Ab.c_d\t9"), "Ab.c_d\t9");
        assert_eq!(normalize("4532@151#1283$366"), "4532@151#1283$366");
    }

    #[test]
    fn tab_is_not_a_separator() {
        assert!(!is_separator('\t'));
        assert!(!is_separator('\n'));
        assert!(is_separator(' '));
        assert!(is_separator('-'));
    }

    #[test]
    fn digit_string_classification() {
        assert!(is_digit_string("0123456789"));
        assert!(is_digit_string(""));
        assert!(!is_digit_string("12a4"));
        assert!(!is_digit_string("12 4"));
        // Arabic-Indic digits are decimal digits under Unicode.
        assert!(is_digit_string("٣٤"));
    }

    #[test]
    fn other_numeric_categories_are_not_decimal_digits() {
        for c in ['½', '²', 'Ⅷ', '①'] {
            assert!(c.is_numeric());
            assert!(!is_decimal_digit(c), "{c:?} should not be a decimal digit");
        }
        assert!(!is_digit_string("12½"));
        assert!(is_decimal_digit('٣'));
        assert!(is_decimal_digit('７')); // fullwidth seven
    }
}
