//! # Sequence Combinators
//!
//! Clojure-style operations over sequences. Inputs are borrowed slices and
//! every operation that produces a sequence returns a freshly allocated
//! `Vec`, so the caller's data is never mutated.
//!
//! ## Conventions
//!
//! - Sequences come in as `&[T]` and go out as `Vec<T>`
//! - Caller-supplied functions receive elements by reference
//! - Operations that need a non-empty input return [`Result`]
//! - Lookups (`first`, `last`, `nth`) borrow from the input instead of cloning
//!
//! ## Example
//!
//! ```
//! use sanity::seq::{filter, map, reduce, remove};
//!
//! let xs = vec![1.0, 2.0, 3.0, -10.0, -1.0, 4.0];
//!
//! let doubled_positives = filter(&map(&xs, |x| 2.0 * x), |x| *x > 0.0);
//! assert_eq!(doubled_positives, vec![2.0, 4.0, 6.0, 8.0]);
//!
//! assert_eq!(remove(&xs, |x| *x > 0.0), vec![-10.0, -1.0]);
//! assert_eq!(reduce(10.0, &xs, |acc, x| acc + x), 9.0);
//! ```

use std::cmp::Ordering;

use crate::error::{Result, SanityError};

// ============================================================================
// Access
// ============================================================================

/// Returns the first element of a sequence.
///
/// # Clojure equivalent
/// ```clojure
/// (first [1 2 3]) => 1
/// ```
///
/// # Errors
/// [`SanityError::EmptyCollection`] when `seq` is empty.
///
/// # Example
/// ```
/// use sanity::seq::first;
/// assert_eq!(first(&[1, 2, 3]), Ok(&1));
/// assert!(first::<i32>(&[]).is_err());
/// ```
pub fn first<T>(seq: &[T]) -> Result<&T> {
    seq.first().ok_or_else(|| SanityError::empty("first"))
}

/// Returns all but the first element. An empty input yields an empty result.
///
/// # Clojure equivalent
/// ```clojure
/// (rest [1 2 3]) => (2 3)
/// (rest [])      => ()
/// ```
pub fn rest<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Returns the last element of a sequence.
///
/// # Errors
/// [`SanityError::EmptyCollection`] when `seq` is empty.
pub fn last<T>(seq: &[T]) -> Result<&T> {
    seq.last().ok_or_else(|| SanityError::empty("last"))
}

/// Returns the element at a zero-based index.
///
/// # Errors
/// [`SanityError::IndexOutOfRange`] when `index >= seq.len()`.
///
/// # Example
/// ```
/// use sanity::seq::nth;
/// assert_eq!(nth(&['a', 'b', 'c'], 1), Ok(&'b'));
/// assert!(nth(&['a', 'b', 'c'], 3).is_err());
/// ```
pub fn nth<T>(seq: &[T], index: usize) -> Result<&T> {
    seq.get(index).ok_or_else(|| {
        tracing::debug!(index, len = seq.len(), "nth out of range");
        SanityError::IndexOutOfRange {
            index,
            len: seq.len(),
        }
    })
}

/// Returns the element at `index`, or `not_found` when the index is out of bounds.
///
/// # Clojure equivalent
/// ```clojure
/// (nth [:a :b] 5 :none) => :none
/// ```
pub fn nth_or<'a, T>(seq: &'a [T], index: usize, not_found: &'a T) -> &'a T {
    seq.get(index).unwrap_or(not_found)
}

// ============================================================================
// Projection and folding
// ============================================================================

/// Applies `f` to every element, producing a sequence of the same length and order.
///
/// # Clojure equivalent
/// ```clojure
/// (map #(* 3 %) [1 2 3]) => (3 6 9)
/// ```
///
/// # Example
/// ```
/// use sanity::seq::map;
/// assert_eq!(map(&[1, 2, 3], |x| x * 3), vec![3, 6, 9]);
/// assert_eq!(map(&[1, 2], |x| x.to_string()), vec!["1", "2"]);
/// ```
pub fn map<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    seq.iter().map(f).collect()
}

/// Left fold starting at `init`, applied in sequence order.
///
/// # Clojure equivalent
/// ```clojure
/// (reduce + 10 [1 2 3]) => 16
/// ```
///
/// # Example
/// ```
/// use sanity::seq::reduce;
/// assert_eq!(reduce(10.0, &[1.0, 2.0, 3.0], |acc, x| acc + x), 16.0);
/// let csv = reduce(String::new(), &["a", "b"], |acc, s| acc + *s + ",");
/// assert_eq!(csv, "a,b,");
/// ```
pub fn reduce<T, U, F>(init: U, seq: &[T], f: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    seq.iter().fold(init, f)
}

/// Left fold seeded with the first element and run over the rest.
///
/// # Clojure equivalent
/// ```clojure
/// (reduce + [1 2 3]) => 6
/// ```
///
/// # Errors
/// [`SanityError::EmptyCollection`] when `seq` is empty.
pub fn reduce1<T, F>(seq: &[T], f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    fold_first("reduce1", seq, f)
}

/// Smallest element by `<`. Ties keep the earliest element.
///
/// # Errors
/// [`SanityError::EmptyCollection`] when `seq` is empty.
///
/// # Example
/// ```
/// use sanity::seq::minimum;
/// assert_eq!(minimum(&[3, 1, 2]), Ok(1));
/// ```
pub fn minimum<T: PartialOrd + Clone>(seq: &[T]) -> Result<T> {
    fold_first("minimum", seq, |acc, x| if *x < acc { x.clone() } else { acc })
}

/// Largest element by `>`. Ties keep the earliest element.
///
/// # Errors
/// [`SanityError::EmptyCollection`] when `seq` is empty.
pub fn maximum<T: PartialOrd + Clone>(seq: &[T]) -> Result<T> {
    fold_first("maximum", seq, |acc, x| if *x > acc { x.clone() } else { acc })
}

fn fold_first<T, F>(op: &'static str, seq: &[T], f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (head, tail) = seq.split_first().ok_or_else(|| SanityError::empty(op))?;
    Ok(tail.iter().fold(head.clone(), f))
}

// ============================================================================
// Selection
// ============================================================================

/// Keeps the elements for which `predicate` holds, preserving order.
///
/// # Clojure equivalent
/// ```clojure
/// (filter pos? [1 2 3 -10 -1 4]) => (1 2 3 4)
/// ```
///
/// # Example
/// ```
/// use sanity::seq::filter;
/// assert_eq!(filter(&[1, 2, 3, -10, -1, 4], |x| *x > 0), vec![1, 2, 3, 4]);
/// ```
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Keeps the elements for which `predicate` does not hold. Complement of [`filter`].
///
/// # Example
/// ```
/// use sanity::seq::remove;
/// assert_eq!(remove(&[1, 2, 3, -10, -1, 4], |x| *x > 0), vec![-10, -1]);
/// ```
pub fn remove<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| !predicate(x)).cloned().collect()
}

/// True when `predicate` holds for every element (vacuously true on empty input).
pub fn every<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().all(predicate)
}

/// True when `predicate` holds for at least one element (false on empty input).
pub fn any<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Membership test by equality.
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.contains(value)
}

/// Zero-based index of the first element equal to `value`.
///
/// # Example
/// ```
/// use sanity::seq::index_of;
/// assert_eq!(index_of(&["apple", "banana"], &"banana"), Some(1));
/// assert_eq!(index_of(&["apple", "banana"], &"grape"), None);
/// ```
pub fn index_of<T: PartialEq>(seq: &[T], value: &T) -> Option<usize> {
    seq.iter().position(|x| x == value)
}

// ============================================================================
// Ordering
// ============================================================================

/// Stable sort, least to greatest, by `<`.
///
/// # Panics
/// `<` must be a strict weak order over the elements. For floats that means no
/// NaN: with a NaN present the standard library's sort may detect the
/// inconsistent order and panic. Use [`sort_by`] with `f64::total_cmp` or
/// filter NaN out first.
///
/// # Example
/// ```
/// use sanity::seq::sort;
/// assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(sort(&[2.5, -1.0]), vec![-1.0, 2.5]);
/// ```
pub fn sort<T: PartialOrd + Clone>(seq: &[T]) -> Vec<T> {
    sort_by(seq, |a, b| a < b)
}

/// Stable sort using a strict "less than" predicate.
///
/// `less` must be a strict weak order: elements where neither `less(a, b)`
/// nor `less(b, a)` holds are treated as equal and keep their input order.
///
/// # Panics
/// May panic when `less` is not a strict weak order, since the standard
/// library's sort checks for inconsistent comparisons.
///
/// # Example
/// ```
/// use sanity::seq::sort_by;
/// let by_len = sort_by(&["ccc", "a", "bb", "d"], |a, b| a.len() < b.len());
/// assert_eq!(by_len, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn sort_by<T, F>(seq: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = seq.to_vec();
    result.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    result
}

/// Reverses the order of elements.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

// ============================================================================
// Construction
// ============================================================================

/// New sequence with `item` in front.
///
/// # Clojure equivalent
/// ```clojure
/// (cons 0 [1 2]) => (0 1 2)
/// ```
pub fn cons<T: Clone>(seq: &[T], item: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.push(item);
    result.extend_from_slice(seq);
    result
}

/// New sequence with `item` appended.
///
/// # Clojure equivalent
/// ```clojure
/// (conj [1 2] 3) => [1 2 3]
/// ```
pub fn conj<T: Clone>(seq: &[T], item: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.extend_from_slice(seq);
    result.push(item);
    result
}

/// Elements of `seq1` followed by the elements of `seq2`.
///
/// # Example
/// ```
/// use sanity::seq::concat;
/// assert_eq!(concat(&[1, 2], &[3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn concat<T: Clone>(seq1: &[T], seq2: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(seq1.len() + seq2.len());
    result.extend_from_slice(seq1);
    result.extend_from_slice(seq2);
    result
}

/// First of each, then second of each, and so on, up to the shorter length.
///
/// # Clojure equivalent
/// ```clojure
/// (interleave [:a :b :c] [1 2]) => (:a 1 :b 2)
/// ```
pub fn interleave<T: Clone>(seq1: &[T], seq2: &[T]) -> Vec<T> {
    seq1.iter()
        .zip(seq2)
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect()
}

/// Inserts `separator` between each adjacent pair of elements.
///
/// # Example
/// ```
/// use sanity::seq::interpose;
/// assert_eq!(interpose(&["a", "b", "c"], ","), vec!["a", ",", "b", ",", "c"]);
/// assert!(interpose::<&str>(&[], ",").is_empty());
/// ```
pub fn interpose<T: Clone>(seq: &[T], separator: T) -> Vec<T> {
    let mut result = Vec::with_capacity((2 * seq.len()).saturating_sub(1));
    for (i, item) in seq.iter().enumerate() {
        if i > 0 {
            result.push(separator.clone());
        }
        result.push(item.clone());
    }
    result
}

/// `n` copies of `item`.
pub fn repeat<T: Clone>(item: &T, n: usize) -> Vec<T> {
    vec![item.clone(); n]
}

/// Results of calling `f` `n` times, in call order. `f` usually has side effects.
///
/// # Example
/// ```
/// use sanity::seq::repeatedly;
/// let mut counter = 0;
/// let ticks = repeatedly(3, || {
///     counter += 1;
///     counter
/// });
/// assert_eq!(ticks, vec![1, 2, 3]);
/// ```
pub fn repeatedly<T, F>(n: usize, mut f: F) -> Vec<T>
where
    F: FnMut() -> T,
{
    (0..n).map(|_| f()).collect()
}

/// `[seed, f(seed), f(f(seed)), ...]` with `n` elements.
///
/// # Clojure equivalent
/// ```clojure
/// (take 4 (iterate #(* 2 %) 1)) => (1 2 4 8)
/// ```
///
/// # Example
/// ```
/// use sanity::seq::iterate;
/// assert_eq!(iterate(4, |x| x * 2, 1), vec![1, 2, 4, 8]);
/// assert!(iterate(0, |x| x * 2, 1).is_empty());
/// ```
pub fn iterate<T, F>(n: usize, mut f: F, seed: T) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    let mut result = Vec::with_capacity(n);
    if n == 0 {
        return result;
    }
    let mut current = seed;
    for _ in 1..n {
        let next = f(&current);
        result.push(current);
        current = next;
    }
    result.push(current);
    result
}

// ============================================================================
// Slicing
// ============================================================================

/// The first `n` elements, or all of them when `n` exceeds the length.
///
/// # Example
/// ```
/// use sanity::seq::take;
/// assert_eq!(take(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(take(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn take<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[..n.min(seq.len())].to_vec()
}

/// All but the first `n` elements; empty when `n` exceeds the length.
///
/// # Example
/// ```
/// use sanity::seq::drop;
/// assert_eq!(drop(&[1, 2, 3], 1), vec![2, 3]);
/// assert!(drop(&[1, 2, 3], 5).is_empty());
/// ```
pub fn drop<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[n.min(seq.len())..].to_vec()
}

/// Longest prefix whose elements all satisfy `predicate`.
pub fn take_while<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq[..split_point(seq, predicate)].to_vec()
}

/// Everything from the first element that fails `predicate` onwards.
///
/// # Example
/// ```
/// use sanity::seq::drop_while;
/// assert_eq!(drop_while(&[1, 2, 5, 1], |x| *x < 3), vec![5, 1]);
/// ```
pub fn drop_while<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq[split_point(seq, predicate)..].to_vec()
}

/// Index of the first element failing `predicate`, or the length.
fn split_point<T, F>(seq: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    seq.iter().position(|x| !predicate(x)).unwrap_or(seq.len())
}
