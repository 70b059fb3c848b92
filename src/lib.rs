//! # utilkit
//!
//! Small, stateless helpers for classifying strings and updating
//! insertion-ordered maps.
//!
//! ## Usage
//!
//! ```
//! use indexmap::IndexMap;
//! use utilkit::{is_blank, is_numeric, numeric_part, upsert};
//!
//! assert!(is_blank(Some("   ")));
//! assert!(!is_numeric(Some("12.3")));
//! assert_eq!(numeric_part("Price: $12,345.67!"), "12,345.67");
//!
//! let map: IndexMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let map = upsert(&map, "c", 3);
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! ```
//!
//! ## Modules
//!
//! - `strings` - Emptiness, blankness, alphanumeric and numeric checks, substring and regex search
//! - `collections` - First-entry lookup and order-preserving upsert for `IndexMap`
//! - `error` - Error type for the fallible helpers
pub mod collections;
pub mod error;
pub mod strings;

pub use collections::{first_entry, first_key, first_value, upsert, upsert_in_place};
pub use error::{Result, UtilError};
pub use strings::{
    contains, has_matched, has_matched_pattern, is_alphanumeric, is_blank, is_empty,
    is_not_blank, is_not_empty, is_numeric, numeric_part, try_contains, StrClassify,
};
