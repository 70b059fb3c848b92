use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for the fallible helpers in this crate
///
/// The plain predicates never fail. Only the variants that take optional
/// arguments or compile a pattern at runtime return this type.
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("[E{code:04}] Invalid argument: {message}")]
    InvalidArgument {
        code: u16,
        message: String,
        argument: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Pattern error: {message}")]
    Pattern {
        code: u16,
        message: String,
        pattern: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl UtilError {
    /// Create an error for a required argument that was absent
    pub fn missing_argument(argument: impl Into<String>) -> Self {
        let argument = argument.into();
        Self::InvalidArgument {
            code: ErrorCode::ARGUMENT_MISSING,
            message: format!("'{}' must be present", argument),
            argument: Some(argument),
            source: None,
        }
    }

    /// Create a pattern error from a failed regex compilation
    pub fn invalid_pattern(pattern: impl Into<String>, err: regex::Error) -> Self {
        let code = match &err {
            regex::Error::Syntax(_) => ErrorCode::PATTERN_SYNTAX,
            regex::Error::CompiledTooBig(_) => ErrorCode::PATTERN_TOO_LARGE,
            _ => ErrorCode::PATTERN_GENERIC,
        };
        Self::Pattern {
            code,
            message: describe_error_code(code).to_string(),
            pattern: Some(pattern.into()),
            source: None,
        }
        .with_source(err)
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::InvalidArgument { source: src, .. } | Self::Pattern { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. } | Self::Pattern { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument {
                message, argument, ..
            } => {
                if let Some(arg) = argument {
                    format!("Invalid argument '{}': {}", arg, message)
                } else {
                    format!("Invalid argument: {}", message)
                }
            }
            Self::Pattern {
                message, pattern, ..
            } => {
                if let Some(p) = pattern {
                    format!("Pattern '{}' rejected: {}", p, message)
                } else {
                    format!("Pattern error: {}", message)
                }
            }
        }
    }
}

/// Type alias for Results using UtilError
pub type Result<T> = std::result::Result<T, UtilError>;
