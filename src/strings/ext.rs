//! Method-call forms of the string helpers

use super::{is_alphanumeric, is_blank, is_numeric, numeric_part};

/// Extension trait exposing the classifiers as methods on `str`
///
/// Names carry a `_text` suffix where `str` already has an inherent
/// method of the same name.
pub trait StrClassify {
    fn is_blank_text(&self) -> bool;
    fn is_alphanumeric_text(&self) -> bool;
    fn is_numeric_text(&self) -> bool;
    fn numeric_part(&self) -> String;
}

impl StrClassify for str {
    fn is_blank_text(&self) -> bool {
        is_blank(Some(self))
    }

    fn is_alphanumeric_text(&self) -> bool {
        is_alphanumeric(Some(self))
    }

    fn is_numeric_text(&self) -> bool {
        is_numeric(Some(self))
    }

    fn numeric_part(&self) -> String {
        numeric_part(self)
    }
}
