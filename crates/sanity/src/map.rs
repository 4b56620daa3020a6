//! # Mapping Combinators
//!
//! Functional operations over associative collections, backed by
//! `im::OrdMap` for cheap clones with structural sharing.
//!
//! ## Functional Semantics
//!
//! Every operation that "adds" or "removes" a binding returns a new [`Map`].
//! The input is left untouched, and thanks to structural sharing only the
//! changed path is allocated.
//!
//! Iteration follows ascending key order, so [`keys`], [`vals`] and
//! [`pairs`] always line up with each other.
//!
//! ## Example
//!
//! ```
//! use sanity::map::{assoc, dissoc, get, zipmap};
//!
//! let m = zipmap(&["a", "b"], &[1, 2]).unwrap();
//! let m2 = assoc(&m, "c", 3);
//! let m3 = dissoc(&m2, &"a");
//!
//! // m is unchanged (functional update)
//! assert_eq!(get(&m, &"c", &0), &0);
//! assert_eq!(get(&m2, &"c", &0), &3);
//! assert_eq!(get(&m3, &"a", &0), &0);
//! ```

use im::OrdMap;

use crate::error::{Result, SanityError};

/// A persistent, ordered mapping from unique keys to values.
pub type Map<K, V> = OrdMap<K, V>;

// ============================================================================
// Views
// ============================================================================

/// Keys in ascending order.
///
/// # Clojure equivalent
/// ```clojure
/// (keys {:a 1 :b 2}) => (:a :b)
/// ```
pub fn keys<K: Ord + Clone, V: Clone>(map: &Map<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Values, in the same order as [`keys`].
pub fn vals<K: Ord + Clone, V: Clone>(map: &Map<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// `(key, value)` pairs, in the same order as [`keys`].
///
/// # Example
/// ```
/// use sanity::map::{pairs, zipmap};
/// let m = zipmap(&["b", "a"], &[2, 1]).unwrap();
/// assert_eq!(pairs(&m), vec![("a", 1), ("b", 2)]);
/// ```
pub fn pairs<K: Ord + Clone, V: Clone>(map: &Map<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ============================================================================
// Construction and lookup
// ============================================================================

/// Builds a mapping pairing `keys[i]` with `vals[i]`.
///
/// Duplicate keys keep the binding that appears last.
///
/// # Clojure equivalent
/// ```clojure
/// (zipmap ["a" "b"] [1 2]) => {"a" 1, "b" 2}
/// ```
///
/// # Errors
/// [`SanityError::LengthMismatch`] when the sequences differ in length.
///
/// # Example
/// ```
/// use sanity::map::{zipmap, Map};
/// use sanity::SanityError;
///
/// let m: Map<&str, i32> = zipmap(&["a", "b"], &[1, 2]).unwrap();
/// assert_eq!(m.get("a"), Some(&1));
///
/// assert_eq!(
///     zipmap(&["a"], &[1, 2]),
///     Err(SanityError::LengthMismatch { keys: 1, vals: 2 })
/// );
/// ```
pub fn zipmap<K, V>(keys: &[K], vals: &[V]) -> Result<Map<K, V>>
where
    K: Ord + Clone,
    V: Clone,
{
    if keys.len() != vals.len() {
        tracing::debug!(keys = keys.len(), vals = vals.len(), "zipmap length mismatch");
        return Err(SanityError::LengthMismatch {
            keys: keys.len(),
            vals: vals.len(),
        });
    }
    Ok(keys.iter().cloned().zip(vals.iter().cloned()).collect())
}

/// True when `key` is bound.
pub fn has_key<K: Ord + Clone, V: Clone>(map: &Map<K, V>, key: &K) -> bool {
    map.contains_key(key)
}

/// The value bound to `key`, or `not_found`.
///
/// # Clojure equivalent
/// ```clojure
/// (get {:a 1} :b 0) => 0
/// ```
pub fn get<'a, K, V>(map: &'a Map<K, V>, key: &K, not_found: &'a V) -> &'a V
where
    K: Ord + Clone,
    V: Clone,
{
    map.get(key).unwrap_or(not_found)
}

/// Returns a new mapping with `key` bound to `value`, overwriting any existing binding.
///
/// # Example
/// ```
/// use sanity::map::{assoc, Map};
///
/// let m1: Map<&str, i32> = Map::new();
/// let m2 = assoc(&m1, "x", 1);
/// let m3 = assoc(&m2, "x", 2);
///
/// assert!(m1.is_empty());
/// assert_eq!(m2.get("x"), Some(&1));
/// assert_eq!(m3.get("x"), Some(&2));
/// ```
#[must_use]
pub fn assoc<K, V>(map: &Map<K, V>, key: K, value: V) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    map.update(key, value)
}

/// Returns a new mapping without `key`. An absent key yields an unchanged copy.
#[must_use]
pub fn dissoc<K, V>(map: &Map<K, V>, key: &K) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    map.without(key)
}

// ============================================================================
// Combining
// ============================================================================

/// Union of two mappings. Bindings from `map2` win on key collisions.
///
/// # Example
/// ```
/// use sanity::map::{merge, pairs, zipmap};
///
/// let a = zipmap(&["x", "y"], &[1, 2]).unwrap();
/// let b = zipmap(&["y", "z"], &[20, 30]).unwrap();
/// assert_eq!(pairs(&merge(&a, &b)), vec![("x", 1), ("y", 20), ("z", 30)]);
/// ```
#[must_use]
pub fn merge<K, V>(map1: &Map<K, V>, map2: &Map<K, V>) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    // `union` keeps the receiver's value on collision.
    map2.clone().union(map1.clone())
}

/// Union of two mappings, resolving collisions with `f(value_in_map1, value_in_map2)`.
///
/// # Clojure equivalent
/// ```clojure
/// (merge-with + {:a 1 :b 2} {:b 10}) => {:a 1 :b 12}
/// ```
#[must_use]
pub fn merge_with<K, V, F>(f: F, map1: &Map<K, V>, map2: &Map<K, V>) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: Fn(&V, &V) -> V,
{
    map1.clone().union_with(map2.clone(), |v1, v2| f(&v1, &v2))
}

/// Renames keys found in `renames` to their target key; other bindings are kept.
///
/// Renamed bindings are applied after the untouched ones, so a rename onto an
/// existing key replaces that key's value. When several keys rename to the same
/// target, the greatest source key wins.
///
/// # Example
/// ```
/// use sanity::map::{pairs, rename_keys, zipmap};
///
/// let m = zipmap(&["a", "b", "c"], &[1, 2, 3]).unwrap();
/// let renames = zipmap(&["a", "b"], &["b", "a"]).unwrap();
/// assert_eq!(pairs(&rename_keys(&m, &renames)), vec![("a", 2), ("b", 1), ("c", 3)]);
/// ```
#[must_use]
pub fn rename_keys<K, V>(map: &Map<K, V>, renames: &Map<K, K>) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    let (renamed, kept): (Vec<_>, Vec<_>) = map
        .iter()
        .partition(|(k, _)| renames.contains_key(*k));

    let mut result: Map<K, V> = kept
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (k, v) in renamed {
        if let Some(target) = renames.get(k) {
            result.insert(target.clone(), v.clone());
        }
    }
    result
}

// ============================================================================
// Projection and folding over entries
// ============================================================================

/// Applies `f` to every binding, keeping the keys.
///
/// # Example
/// ```
/// use sanity::map::{map_vals, vals, zipmap};
/// let m = zipmap(&["a", "b"], &[1, 2]).unwrap();
/// assert_eq!(vals(&map_vals(&m, |_, v| v * 10)), vec![10, 20]);
/// ```
pub fn map_vals<K, V, U, F>(map: &Map<K, V>, mut f: F) -> Map<K, U>
where
    K: Ord + Clone,
    V: Clone,
    U: Clone,
    F: FnMut(&K, &V) -> U,
{
    map.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
}

/// Keeps the bindings for which `predicate` holds.
pub fn filter_entries<K, V, F>(map: &Map<K, V>, mut predicate: F) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Keeps the bindings for which `predicate` does not hold.
pub fn remove_entries<K, V, F>(map: &Map<K, V>, mut predicate: F) -> Map<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    filter_entries(map, |k, v| !predicate(k, v))
}

/// Left fold over bindings in key order.
///
/// # Example
/// ```
/// use sanity::map::{reduce_kv, zipmap};
/// let m = zipmap(&["a", "b"], &[1, 2]).unwrap();
/// let joined = reduce_kv(String::new(), &m, |acc, k, v| format!("{acc}{k}={v};"));
/// assert_eq!(joined, "a=1;b=2;");
/// ```
pub fn reduce_kv<K, V, U, F>(init: U, map: &Map<K, V>, mut f: F) -> U
where
    K: Ord + Clone,
    V: Clone,
    F: FnMut(U, &K, &V) -> U,
{
    map.iter().fold(init, |acc, (k, v)| f(acc, k, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::ordmap;

    #[test]
    fn test_keys_vals_pairs_align() {
        let m = ordmap! {"c" => 3, "a" => 1, "b" => 2};
        assert_eq!(keys(&m), vec!["a", "b", "c"]);
        assert_eq!(vals(&m), vec![1, 2, 3]);
        assert_eq!(pairs(&m), vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_empty_map_views() {
        let m: Map<String, i32> = Map::new();
        assert!(keys(&m).is_empty());
        assert!(vals(&m).is_empty());
        assert!(pairs(&m).is_empty());
    }

    #[test]
    fn test_zipmap() {
        let m = zipmap(&["a", "b"], &[1, 2]).unwrap();
        assert_eq!(m, ordmap! {"a" => 1, "b" => 2});

        assert_eq!(
            zipmap(&["a"], &[1, 2]),
            Err(SanityError::LengthMismatch { keys: 1, vals: 2 })
        );
        assert_eq!(zipmap::<i32, i32>(&[], &[]), Ok(Map::new()));
    }

    #[test]
    fn test_zipmap_duplicate_keys_last_wins() {
        let m = zipmap(&["a", "b", "a"], &[1, 2, 3]).unwrap();
        assert_eq!(m, ordmap! {"a" => 3, "b" => 2});
    }

    #[test]
    fn test_assoc_is_functional_update() {
        let m1 = ordmap! {"x" => 1};
        let m2 = assoc(&m1, "x", 2);
        let m3 = assoc(&m2, "y", 3);

        // Original unchanged
        assert_eq!(m1, ordmap! {"x" => 1});
        assert_eq!(m2, ordmap! {"x" => 2});
        assert_eq!(m3, ordmap! {"x" => 2, "y" => 3});
    }

    #[test]
    fn test_dissoc() {
        let m = ordmap! {"x" => 1, "y" => 2};
        assert_eq!(dissoc(&m, &"x"), ordmap! {"y" => 2});
        assert_eq!(dissoc(&m, &"missing"), m);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_has_key_and_get() {
        let m = ordmap! {"x" => 1};
        assert!(has_key(&m, &"x"));
        assert!(!has_key(&m, &"y"));
        assert_eq!(get(&m, &"x", &-1), &1);
        assert_eq!(get(&m, &"y", &-1), &-1);
    }

    #[test]
    fn test_merge_right_wins() {
        let a = ordmap! {"x" => 1, "y" => 2};
        let b = ordmap! {"y" => 20, "z" => 30};
        assert_eq!(merge(&a, &b), ordmap! {"x" => 1, "y" => 20, "z" => 30});
        assert_eq!(merge(&b, &a), ordmap! {"x" => 1, "y" => 2, "z" => 30});
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_merge_with_combines_collisions() {
        let a = ordmap! {"x" => 1, "y" => 2};
        let b = ordmap! {"y" => 10, "z" => 30};
        let merged = merge_with(|v1, v2| v1 - v2, &a, &b);
        assert_eq!(merged, ordmap! {"x" => 1, "y" => -8, "z" => 30});
    }

    #[test]
    fn test_rename_keys() {
        let m = ordmap! {"a" => 1, "b" => 2};
        let renamed = rename_keys(&m, &ordmap! {"a" => "alpha"});
        assert_eq!(renamed, ordmap! {"alpha" => 1, "b" => 2});

        // Unknown rename sources are ignored
        let unchanged = rename_keys(&m, &ordmap! {"q" => "r"});
        assert_eq!(unchanged, m);
    }

    #[test]
    fn test_rename_keys_collisions() {
        let m = ordmap! {"a" => 1, "b" => 2, "c" => 3};

        // Renamed binding replaces an untouched one
        let over = rename_keys(&m, &ordmap! {"a" => "c"});
        assert_eq!(over, ordmap! {"b" => 2, "c" => 1});

        // Two renames onto one target: greatest source key wins
        let both = rename_keys(&m, &ordmap! {"a" => "z", "b" => "z"});
        assert_eq!(both, ordmap! {"c" => 3, "z" => 2});
    }

    #[test]
    fn test_map_vals_filter_remove_reduce() {
        let m = ordmap! {"a" => 1, "b" => 2, "c" => 3};

        let labelled = map_vals(&m, |k, v| format!("{k}{v}"));
        assert_eq!(vals(&labelled), vec!["a1", "b2", "c3"]);

        assert_eq!(filter_entries(&m, |_, v| v % 2 == 1), ordmap! {"a" => 1, "c" => 3});
        assert_eq!(remove_entries(&m, |_, v| v % 2 == 1), ordmap! {"b" => 2});
        assert_eq!(reduce_kv(0, &m, |acc, _, v| acc + v), 6);
    }
}
