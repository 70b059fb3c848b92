//! Whole-string predicates
//!
//! Absent (`None`) and zero-length input are treated alike: both are empty
//! and blank, neither is alphanumeric or numeric.

use super::chars::{is_digit, is_letter_or_digit, is_whitespace};

/// Checks if a string is empty (`""`) or absent.
///
/// ```
/// use utilkit::strings::is_empty;
///
/// assert!(is_empty(None));
/// assert!(is_empty(Some("")));
/// assert!(!is_empty(Some(" ")));
/// assert!(!is_empty(Some("bob")));
/// ```
pub fn is_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// Negation of [`is_empty`]
pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_empty(text)
}

/// Checks if a string is absent, empty, or made only of spaces.
///
/// Only `' '` counts as a space. A string of tabs or newlines is not blank.
///
/// ```
/// use utilkit::strings::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("")));
/// assert!(is_blank(Some("   ")));
/// assert!(!is_blank(Some("  bob  ")));
/// assert!(!is_blank(Some("\t")));
/// ```
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |s| s.chars().all(is_whitespace))
}

/// Negation of [`is_blank`]
pub fn is_not_blank(text: Option<&str>) -> bool {
    !is_blank(text)
}

/// Checks if the string contains only letters, digits or `_`.
///
/// Zero-width joiners, combining marks and connector punctuation such as
/// `‿` are not letters.
///
/// Absent and empty strings return `false`.
///
/// ```
/// use utilkit::strings::is_alphanumeric;
///
/// assert!(is_alphanumeric(Some("ab2c")));
/// assert!(is_alphanumeric(Some("ab_c")));
/// assert!(!is_alphanumeric(Some("ab c")));
/// assert!(!is_alphanumeric(Some("ab-c")));
/// ```
pub fn is_alphanumeric(text: Option<&str>) -> bool {
    match text {
        Some(s) if !s.is_empty() => s.chars().all(is_letter_or_digit),
        _ => false,
    }
}

/// Checks if the string contains only decimal digits.
///
/// A leading sign, a decimal point or any space makes the string
/// non-numeric. Digits from other scripts are accepted.
///
/// ```
/// use utilkit::strings::is_numeric;
///
/// assert!(is_numeric(Some("123")));
/// assert!(is_numeric(Some("\u{0967}\u{0968}\u{0969}")));
/// assert!(!is_numeric(Some("12.3")));
/// assert!(!is_numeric(Some("-123")));
/// assert!(!is_numeric(Some("12 3")));
/// ```
pub fn is_numeric(text: Option<&str>) -> bool {
    match text {
        Some(s) if !s.is_empty() => s.chars().all(is_digit),
        _ => false,
    }
}
