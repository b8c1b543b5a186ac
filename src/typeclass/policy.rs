//! Failure policies for short-circuiting kinds.
//!
//! When both operands of a `Result` zip fail, only one error can survive.
//! A [`FailurePolicy`] decides which one, by combining the two errors with the
//! [`First`] or [`Last`] semigroup.
//!
//! # Examples
//!
//! ```rust
//! use zipwise::typeclass::{FailurePolicy, FirstFailure, LastFailure};
//!
//! assert_eq!(FirstFailure::resolve("left", "right"), "left");
//! assert_eq!(LastFailure::resolve("left", "right"), "right");
//! ```

use super::semigroup::{First, Last, Semigroup};

/// Chooses the surviving error when two failures meet.
///
/// Implementations must be associative, so that `sequence` over any number of
/// failures picks the same error regardless of how the fold is bracketed.
pub trait FailurePolicy {
    /// Resolves two failures, `left` coming from the left operand.
    fn resolve<E>(left: E, right: E) -> E;
}

/// Keeps the left operand's error. This is the default policy.
///
/// Sequencing under this policy reports the first failing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FirstFailure;

impl FailurePolicy for FirstFailure {
    #[inline]
    fn resolve<E>(left: E, right: E) -> E {
        First(left).combine(First(right)).0
    }
}

/// Keeps the right operand's error.
///
/// Zipping two failures returns the second one, and sequencing under this
/// policy reports the last failing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LastFailure;

impl FailurePolicy for LastFailure {
    #[inline]
    fn resolve<E>(left: E, right: E) -> E {
        Last(left).combine(Last(right)).0
    }
}
