//! # Arithmetic Progressions
//!
//! Eager counterparts of Clojure's `range`, returning a `Vec`.
//!
//! Progressions are bounded by the element type as well as by `end`: an
//! integer progression stops where the next term would overflow, and a float
//! progression whose step is too small to change the current term is an error.
//!
//! ```
//! use sanity::range::{range, range_from, range_step};
//!
//! assert_eq!(range(4), vec![0, 1, 2, 3]);
//! assert_eq!(range_from(2, 5), Ok(vec![2, 3, 4]));
//! assert_eq!(range_step(1.0, 2.0, 0.25).unwrap(), vec![1.0, 1.25, 1.5, 1.75]);
//! ```

use std::cmp::Ordering;

use crate::error::{Result, SanityError};

/// Numeric types that can be stepped through by a progression.
pub trait Step: Copy + PartialOrd {
    /// Additive identity.
    const ZERO: Self;
    /// Unit step.
    const ONE: Self;

    /// `self + step`, or `None` when the sum leaves the type's range.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step_int {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_step_float {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                // Overflow saturates to infinity, which ends any finite progression.
                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_step_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_float!(f32, f64);

/// `0, 1, ..., end - 1`. Empty when `end <= 0`.
///
/// # Clojure equivalent
/// ```clojure
/// (range 5) => (0 1 2 3 4)
/// ```
pub fn range(end: i64) -> Vec<i64> {
    (0..end).collect()
}

/// `start, start + 1, ...` strictly below `end`.
///
/// # Errors
/// [`SanityError::StepTooSmall`] when adding one no longer changes a float term.
///
/// # Example
/// ```
/// use sanity::range::range_from;
/// assert_eq!(range_from(-2, 1), Ok(vec![-2, -1, 0]));
/// assert_eq!(range_from(0.5, 3.0), Ok(vec![0.5, 1.5, 2.5]));
/// assert_eq!(range_from(5, 5), Ok(vec![]));
/// ```
pub fn range_from<T: Step>(start: T, end: T) -> Result<Vec<T>> {
    progression(start, end, T::ONE, Ordering::Less)
}

/// `start, start + step, ...` up to but excluding `end`.
///
/// A positive step counts up while below `end`; a negative step counts down
/// while above it. Integer progressions also stop where the next term would
/// overflow the type.
///
/// # Errors
/// - [`SanityError::ZeroStep`] when `step` is zero.
/// - [`SanityError::StepTooSmall`] when adding `step` no longer changes a float term.
///
/// # Example
/// ```
/// use sanity::range::range_step;
/// use sanity::SanityError;
///
/// assert_eq!(range_step(0, 10, 3), Ok(vec![0, 3, 6, 9]));
/// assert_eq!(range_step(5, 0, -2), Ok(vec![5, 3, 1]));
/// assert_eq!(range_step(0i8, 127, 100), Ok(vec![0, 100]));
/// assert_eq!(range_step(0, 10, 0), Err(SanityError::ZeroStep));
/// ```
pub fn range_step<T: Step>(start: T, end: T, step: T) -> Result<Vec<T>> {
    match step.partial_cmp(&T::ZERO) {
        Some(Ordering::Greater) => progression(start, end, step, Ordering::Less),
        Some(Ordering::Less) => progression(start, end, step, Ordering::Greater),
        Some(Ordering::Equal) => {
            tracing::debug!("range with zero step");
            Err(SanityError::ZeroStep)
        }
        // Unordered step (NaN) never moves toward `end`.
        None => Ok(Vec::new()),
    }
}

/// Collects `start, start + step, ...` while each term compares to `end` as `direction`.
fn progression<T: Step>(start: T, end: T, step: T, direction: Ordering) -> Result<Vec<T>> {
    let mut result = Vec::new();
    let mut current = start;
    while current.partial_cmp(&end) == Some(direction) {
        result.push(current);
        match current.checked_step(step) {
            Some(next) if next == current => {
                tracing::debug!(terms = result.len(), "range step absorbed by rounding");
                return Err(SanityError::StepTooSmall);
            }
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(result)
}
