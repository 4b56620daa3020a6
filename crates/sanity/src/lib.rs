//! # Sanity
//!
//! Functional combinators over immutable collections, in the spirit of
//! Clojure and Underscore.js: `map`, `filter`, `reduce`, `take`, `merge`,
//! `zipmap` and friends.
//!
//! ## Modules
//!
//! - [`seq`]: Sequence combinators over slices, returning fresh `Vec`s
//! - [`map`]: Mapping combinators over persistent ordered maps (`im::OrdMap`)
//! - [`range`]: Arithmetic progressions
//! - [`random`]: Shuffling and sampling with an injectable generator
//! - [`error`]: The error type shared by fallible operations
//!
//! ## Design Principles
//!
//! 1. **Immutable by convention**: inputs are borrowed, results are new values
//! 2. **Generic**: every combinator is monomorphised per element type and closure
//! 3. **Explicit failure**: operations needing a non-empty input return [`Result`]
//! 4. **No global state**: randomness comes from the caller or the current thread
//!
//! ## Example
//!
//! ```
//! use sanity::{filter, map, maximum, range, reduce};
//!
//! let xs = range(30);
//! assert_eq!(maximum(&map(&xs, |x| x * 2)), Ok(58));
//! assert_eq!(reduce(0, &filter(&xs, |x| x % 10 == 0), |a, b| a + b), 30);
//! ```

pub mod error;
pub mod map;
pub mod random;
pub mod range;
pub mod seq;

// Re-export main items for convenience
pub use error::{Result, SanityError};
pub use map::{
    assoc, dissoc, filter_entries, get, has_key, keys, map_vals, merge, merge_with, pairs,
    reduce_kv, remove_entries, rename_keys, vals, zipmap, Map,
};
pub use random::{sample, shuffle, shuffle_with};
pub use range::{range, range_from, range_step, Step};
pub use seq::{
    any, concat, conj, cons, contains, drop, drop_while, every, filter, first, index_of,
    interleave, interpose, iterate, last, map, maximum, minimum, nth, nth_or, reduce, reduce1,
    remove, repeat, repeatedly, rest, reverse, sort, sort_by, take, take_while,
};
