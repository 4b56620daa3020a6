//! # Errors
//!
//! Every fallible combinator returns [`Result`]. Failures are local to the
//! call: nothing is retried and no partial collection is ever returned.

use thiserror::Error;

/// Errors raised by the combinators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanityError {
    /// The operation needs at least one element.
    #[error("{op}: collection is empty")]
    EmptyCollection {
        /// Name of the operation that failed.
        op: &'static str,
    },

    /// Positional access past the end without a fallback value.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Paired sequences of unequal length.
    #[error("keys and vals have different lengths ({keys} vs {vals})")]
    LengthMismatch {
        /// Number of keys.
        keys: usize,
        /// Number of values.
        vals: usize,
    },

    /// An arithmetic progression with a zero step never terminates.
    #[error("range step must be non-zero")]
    ZeroStep,

    /// A float step too small to change the current term of a progression.
    #[error("range step is too small to advance past the current term")]
    StepTooSmall,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SanityError>;

impl SanityError {
    pub(crate) fn empty(op: &'static str) -> Self {
        tracing::debug!(op, "operation on empty collection");
        SanityError::EmptyCollection { op }
    }
}
