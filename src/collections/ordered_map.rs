//! First-entry lookup and order-preserving upsert for [`IndexMap`]

use indexmap::IndexMap;
use std::hash::{BuildHasher, Hash};
use tracing::trace;

/// Get the key of the first entry in iteration order
///
/// Returns `None` for an empty map.
pub fn first_key<K, V, S>(map: &IndexMap<K, V, S>) -> Option<&K> {
    map.first().map(|(k, _)| k)
}

/// Get the value bound to [`first_key`]
///
/// Returns `None` for an empty map.
pub fn first_value<K, V, S>(map: &IndexMap<K, V, S>) -> Option<&V> {
    map.first().map(|(_, v)| v)
}

/// Get the first key and its value together
pub fn first_entry<K, V, S>(map: &IndexMap<K, V, S>) -> Option<(&K, &V)> {
    map.first()
}

/// Return a copy of `map` with `key` bound to `value`
///
/// The result is assembled from three segments:
///
/// 1. entries before `key`, unchanged
/// 2. `key -> value`
/// 3. entries after `key`, unchanged
///
/// If `key` is not in `map` the before segment is the whole map and the
/// after segment is empty, so the new entry lands last. `map` itself is
/// left untouched.
///
/// ```
/// use indexmap::IndexMap;
/// use utilkit::collections::upsert;
///
/// let map: IndexMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
///
/// let replaced = upsert(&map, "b", 99);
/// assert_eq!(replaced.into_iter().collect::<Vec<_>>(), [("a", 1), ("b", 99), ("c", 3)]);
///
/// let appended = upsert(&map, "d", 4);
/// assert_eq!(appended.keys().copied().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
/// assert_eq!(map.get("b"), Some(&2));
/// ```
pub fn upsert<K, V, S>(map: &IndexMap<K, V, S>, key: K, value: V) -> IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    let split = match map.get_index_of(&key) {
        Some(index) => {
            trace!(index, len = map.len(), "Upsert replacing existing entry");
            index
        }
        None => {
            trace!(len = map.len(), "Upsert appended new entry");
            map.len()
        }
    };

    let before = map.iter().take(split);
    let after = map.iter().skip(split + 1);

    let mut result = IndexMap::with_capacity_and_hasher(map.len() + 1, map.hasher().clone());
    result.extend(before.map(|(k, v)| (k.clone(), v.clone())));
    result.insert(key, value);
    result.extend(after.map(|(k, v)| (k.clone(), v.clone())));
    result
}

/// Bind `key` to `value` in a map the caller owns
///
/// Same ordering as [`upsert`]: an existing key keeps its position, a new
/// key is appended.
pub fn upsert_in_place<K, V, S>(map: &mut IndexMap<K, V, S>, key: K, value: V)
where
    K: Hash + Eq,
    S: BuildHasher,
{
    let (index, previous) = map.insert_full(key, value);
    trace!(index, replaced = previous.is_some(), "Upsert in place");
}
