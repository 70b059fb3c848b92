/// Error code registry for utilkit
///
/// Error codes are organized by category:
/// - 1000-1999: Argument errors
/// - 2000-2999: Pattern errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Argument errors (1000-1999)
    pub const ARGUMENT_MISSING: u16 = 1001;

    // Pattern errors (2000-2999)
    pub const PATTERN_GENERIC: u16 = 2000;
    pub const PATTERN_SYNTAX: u16 = 2001;
    pub const PATTERN_TOO_LARGE: u16 = 2002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Argument errors
        1001 => "Required argument is absent",

        // Pattern errors
        2000 => "Generic pattern error",
        2001 => "Invalid regular expression syntax",
        2002 => "Compiled regular expression exceeds size limit",

        _ => "Unknown error code",
    }
}
