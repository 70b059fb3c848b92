//! Ordered map helpers
//!
//! Functions over insertion-ordered [`indexmap::IndexMap`] containers. The
//! copying variants never mutate their input, so a caller holding the old
//! map keeps seeing the state before the update.

pub mod ordered_map;

pub use ordered_map::{first_entry, first_key, first_value, upsert, upsert_in_place};
