//! Key-selection helpers over insertion-ordered maps.
//!
//! Pure, stateless companions to the gates. `IndexMap` keeps insertion
//! order, which is the only iteration contract these helpers rely on.

use std::hash::Hash;

use indexmap::IndexMap;

/// New map containing only the entries whose key is both in `keys` and
/// present in `map`. Result order follows `keys`; duplicate requested keys
/// contribute a single entry.
pub fn pick<K, V>(map: &IndexMap<K, V>, keys: &[K]) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut result = IndexMap::new();
    for key in keys {
        if let Some(value) = map.get(key) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Shallow copy of `map` with every key in `keys` removed. Surviving
/// entries keep their relative order.
pub fn omit<K, V>(map: &IndexMap<K, V>, keys: &[K]) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut result = map.clone();
    for key in keys {
        result.shift_remove(key);
    }
    result
}

/// First key, in insertion order, for which `predicate(value, key, map)`
/// holds.
pub fn find_key<'a, K, V, P>(map: &'a IndexMap<K, V>, mut predicate: P) -> Option<&'a K>
where
    P: FnMut(&V, &K, &IndexMap<K, V>) -> bool,
{
    map.iter()
        .find(|(key, value)| predicate(value, key, map))
        .map(|(key, _)| key)
}
