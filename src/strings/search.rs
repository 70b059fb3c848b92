//! Substring search, pattern matching and numeric extraction

use regex::Regex;
use tracing::debug;

use super::chars::is_numeric_part;
use crate::error::{Result, UtilError};

/// Check if `fragment` occurs in `text` as a contiguous substring
///
/// Case-sensitive, no normalization. An empty fragment always matches.
pub fn contains(text: &str, fragment: &str) -> bool {
    text.contains(fragment)
}

/// Substring search over optional arguments
///
/// An absent argument is rejected with
/// [`ErrorCode::ARGUMENT_MISSING`](crate::error::ErrorCode::ARGUMENT_MISSING)
/// rather than being read as "no match".
///
/// # Errors
///
/// Returns [`UtilError::InvalidArgument`] naming `text` or `fragment`.
pub fn try_contains(text: Option<&str>, fragment: Option<&str>) -> Result<bool> {
    let text = text.ok_or_else(|| {
        debug!(argument = "text", "Rejecting substring search on absent input");
        UtilError::missing_argument("text")
    })?;
    let fragment = fragment.ok_or_else(|| {
        debug!(argument = "fragment", "Rejecting substring search on absent input");
        UtilError::missing_argument("fragment")
    })?;

    Ok(contains(text, fragment))
}

/// Extract the numeric characters of a string
///
/// Keeps `0-9`, `.` and `,` in their original order and drops everything
/// else. The result is not checked for being a well-formed number.
///
/// ```
/// use utilkit::strings::numeric_part;
///
/// assert_eq!(numeric_part("Price: $12,345.67!"), "12,345.67");
/// assert_eq!(numeric_part("v1.2.3"), "1.2.3");
/// ```
pub fn numeric_part(text: &str) -> String {
    text.chars().filter(|&c| is_numeric_part(c)).collect()
}

/// Check if `pattern` matches anywhere in `text`
pub fn has_matched(text: &str, pattern: &Regex) -> bool {
    pattern.is_match(text)
}

/// Compile `pattern` and check if it matches anywhere in `text`
///
/// Prefer [`has_matched`] with a precompiled [`Regex`] when the same
/// pattern is used repeatedly.
///
/// # Errors
///
/// Returns [`UtilError::Pattern`] if `pattern` is not a valid regex.
pub fn has_matched_pattern(text: &str, pattern: &str) -> Result<bool> {
    let regex = Regex::new(pattern).map_err(|e| {
        debug!(pattern, error = %e, "Failed to compile match pattern");
        UtilError::invalid_pattern(pattern, e)
    })?;

    Ok(has_matched(text, &regex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_contains() {
        assert!(contains("hello world", "wor"));
        assert!(contains("hello", "hello"));
        assert!(contains("hello", ""));
        assert!(!contains("hello", "z"));
        assert!(!contains("Hello", "hello"));
    }

    #[test]
    fn test_try_contains_present_arguments() {
        assert!(try_contains(Some("hello world"), Some("wor")).unwrap());
        assert!(!try_contains(Some("hello"), Some("z")).unwrap());
    }

    #[test]
    fn test_try_contains_rejects_absent_text() {
        let err = try_contains(None, Some("x")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ARGUMENT_MISSING);
        assert!(matches!(
            err,
            UtilError::InvalidArgument { argument: Some(ref a), .. } if a == "text"
        ));
    }

    #[test]
    fn test_try_contains_rejects_absent_fragment() {
        let err = try_contains(Some("hello"), None).unwrap_err();
        assert!(matches!(
            err,
            UtilError::InvalidArgument { argument: Some(ref a), .. } if a == "fragment"
        ));
    }

    #[test]
    fn test_numeric_part() {
        assert_eq!(numeric_part("Price: $12,345.67!"), "12,345.67");
        assert_eq!(numeric_part("no digits"), "");
        assert_eq!(numeric_part(""), "");
        assert_eq!(numeric_part("1..2,,3"), "1..2,,3");
        assert_eq!(numeric_part("-42"), "42");
    }

    #[test]
    fn test_has_matched() {
        let re = Regex::new(r"\d{3}-\d{4}").unwrap();
        assert!(has_matched("call 555-1234 now", &re));
        assert!(!has_matched("call me", &re));
    }

    #[test]
    fn test_has_matched_pattern() {
        assert!(has_matched_pattern("abc123", r"[a-z]+\d+").unwrap());
        assert!(!has_matched_pattern("abc", r"^\d+$").unwrap());
    }

    #[test]
    fn test_has_matched_pattern_invalid_regex() {
        let err = has_matched_pattern("abc", "(unclosed").unwrap_err();
        assert_eq!(err.code(), ErrorCode::PATTERN_SYNTAX);
    }
}
