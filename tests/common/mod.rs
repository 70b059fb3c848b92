//! Shared helpers for integration tests

use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber so `RUST_LOG=utilkit=trace` shows
/// library events. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The `{a:1, b:2, c:3}` fixture, inserted in that order
#[allow(dead_code)]
pub fn abc_map() -> IndexMap<String, i32> {
    [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Flatten a map into `(key, value)` pairs in iteration order
#[allow(dead_code)]
pub fn pairs(map: &IndexMap<String, i32>) -> Vec<(&str, i32)> {
    map.iter().map(|(k, v)| (k.as_str(), *v)).collect()
}
