use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::constraints::MapKey;

/// Collects every key of `map` into a new vector.
///
/// The order follows the map's iteration order, which is unspecified for
/// `HashMap`. Sort the result with [`crate::sort_slice`] when it matters.
pub fn keys<K: MapKey, V, S: BuildHasher>(map: &HashMap<K, V, S>) -> Vec<K> {
    let mut out = Vec::with_capacity(map.len());
    out.extend(map.keys().cloned());
    out
}
