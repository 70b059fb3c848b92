//! String classification helpers
//!
//! Pure predicates and transforms over a single text value. Inputs that may
//! be absent are taken as `Option<&str>`; none of these functions mutate
//! their input or keep state between calls.

pub mod chars;
pub mod classify;
pub mod ext;
pub mod search;

pub use chars::{is_digit, is_letter_or_digit, is_whitespace};
pub use classify::{is_alphanumeric, is_blank, is_empty, is_not_blank, is_not_empty, is_numeric};
pub use ext::StrClassify;
pub use search::{contains, has_matched, has_matched_pattern, numeric_part, try_contains};
