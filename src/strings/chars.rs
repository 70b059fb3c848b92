//! Single-character classifiers
//!
//! The whole-string predicates in [`super::classify`] are defined in terms
//! of these. Each classifier answers for one `char` in isolation.

use regex::Regex;
use std::sync::LazyLock;

/// The only character treated as whitespace by the blankness checks.
pub const WHITESPACE: char = ' ';

static LETTER_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\p{L}\p{Nd}_]\z").expect("Invalid regex pattern"));
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\p{Nd}\z").expect("Invalid regex pattern"));

/// Check if a character is the blank-making space
///
/// Tabs, newlines and other Unicode spaces are not whitespace here.
pub fn is_whitespace(c: char) -> bool {
    c == WHITESPACE
}

/// Check if a character is a letter, a decimal digit or `_`
///
/// Letters and digits are matched across all scripts. Connector
/// punctuation, combining marks and zero-width joiners are rejected.
pub fn is_letter_or_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    LETTER_OR_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Check if a character is a decimal digit in any script
///
/// Signs, decimal separators and spaces are never digits.
pub fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Check if a character belongs in the output of [`super::numeric_part`]
pub fn is_numeric_part(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | ',')
}
