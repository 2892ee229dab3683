//! ASCII-only character predicates used by the instruction name scanner.
//!
//! Locale and Unicode letter classes are ignored on purpose: `É` is neither
//! upper nor lower case here.

/// `A`..=`Z`
pub fn is_uppercase_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// `a`..=`z`
pub fn is_lowercase_letter(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// `0`..=`9`
pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
