//! Property tests for sanity
//!
//! These tests verify the algebraic laws the combinators promise.

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use sanity::{
    assoc, concat, contains, dissoc, drop, drop_while, every, filter, get, has_key, index_of,
    interpose, keys, map, maximum, merge, minimum, pairs, remove, reverse, sort, sort_by, take,
    take_while, vals, zipmap, Map,
};

// ============================================================
// Sequence properties
// ============================================================

proptest! {
    // concat(take(s, n), drop(s, n)) == s
    #[test]
    fn take_drop_reconstructs(s in vec(any::<i32>(), 0..64), n in 0usize..80) {
        prop_assert_eq!(concat(&take(&s, n), &drop(&s, n)), s);
    }

    #[test]
    fn take_drop_lengths_clamped(s in vec(any::<i32>(), 0..64), n in 0usize..80) {
        prop_assert_eq!(take(&s, n).len(), n.min(s.len()));
        prop_assert_eq!(drop(&s, n).len(), s.len().saturating_sub(n));
    }

    #[test]
    fn map_preserves_length(s in vec(any::<i32>(), 0..64)) {
        let mapped = map(&s, |x| i64::from(*x) * 3);
        prop_assert_eq!(mapped.len(), s.len());
    }

    // Partitioning by position: interleaving filter and remove back by
    // original index recovers the input.
    #[test]
    fn filter_remove_partition(s in vec(any::<i32>(), 0..64)) {
        let indexed: Vec<(usize, i32)> = s.iter().copied().enumerate().collect();
        let kept = filter(&indexed, |(_, x)| x % 3 == 0);
        let dropped = remove(&indexed, |(_, x)| x % 3 == 0);

        prop_assert_eq!(kept.len() + dropped.len(), s.len());
        prop_assert!(every(&kept, |(_, x)| x % 3 == 0));
        prop_assert!(!sanity::any(&dropped, |(_, x)| x % 3 == 0));

        let merged = sort_by(&concat(&kept, &dropped), |a, b| a.0 < b.0);
        prop_assert_eq!(map(&merged, |(_, x)| *x), s);
    }

    #[test]
    fn sort_is_idempotent(s in vec(any::<i32>(), 0..64)) {
        let once = sort(&s);
        prop_assert_eq!(sort(&once), once.clone());
        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reverse_is_involution(s in vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }

    #[test]
    fn take_while_drop_while_split(s in vec(-50i32..50, 0..64)) {
        let prefix = take_while(&s, |x| *x >= 0);
        let suffix = drop_while(&s, |x| *x >= 0);
        prop_assert_eq!(concat(&prefix, &suffix), s);
    }

    #[test]
    fn minimum_maximum_bound_every_element(s in vec(any::<i32>(), 1..64)) {
        let lo = minimum(&s).unwrap();
        let hi = maximum(&s).unwrap();
        prop_assert!(every(&s, |x| lo <= *x && *x <= hi));
        prop_assert!(contains(&s, &lo));
        prop_assert!(contains(&s, &hi));
    }

    #[test]
    fn index_of_finds_first_match(s in vec(0i32..10, 0..64), v in 0i32..10) {
        match index_of(&s, &v) {
            Some(i) => {
                prop_assert_eq!(s[i], v);
                prop_assert!(!contains(&take(&s, i), &v));
            }
            None => prop_assert!(!contains(&s, &v)),
        }
    }

    #[test]
    fn interpose_length(s in vec(any::<u8>(), 0..64)) {
        let expected = (2 * s.len()).saturating_sub(1);
        prop_assert_eq!(interpose(&s, 0).len(), expected);
    }
}

// ============================================================
// Mapping properties
// ============================================================

proptest! {
    #[test]
    fn zipmap_keys_vals_reconstructs(entries in btree_map(any::<i16>(), any::<i32>(), 0..32)) {
        let m: Map<i16, i32> = entries.into_iter().collect();
        prop_assert_eq!(zipmap(&keys(&m), &vals(&m)).unwrap(), m.clone());
        prop_assert_eq!(
            pairs(&m),
            keys(&m).into_iter().zip(vals(&m)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn merge_is_right_biased(
        a in btree_map(0u8..16, any::<i32>(), 0..16),
        b in btree_map(0u8..16, any::<i32>(), 0..16)
    ) {
        let ma: Map<u8, i32> = a.clone().into_iter().collect();
        let mb: Map<u8, i32> = b.clone().into_iter().collect();
        let merged = merge(&ma, &mb);

        for (k, v) in &b {
            prop_assert_eq!(merged.get(k), Some(v));
        }
        for (k, v) in &a {
            if !b.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
        prop_assert!(keys(&merged).iter().all(|k| a.contains_key(k) || b.contains_key(k)));
    }

    #[test]
    fn assoc_then_dissoc(
        entries in btree_map(0u8..32, any::<i32>(), 0..16),
        k in 0u8..32,
        v in any::<i32>()
    ) {
        let m: Map<u8, i32> = entries.into_iter().collect();
        let with = assoc(&m, k, v);
        prop_assert!(has_key(&with, &k));
        prop_assert_eq!(get(&with, &k, &0), &v);

        let without = dissoc(&with, &k);
        prop_assert!(!has_key(&without, &k));
        prop_assert_eq!(dissoc(&m, &k), without);
    }
}
