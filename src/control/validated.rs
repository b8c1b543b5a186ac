//! Validated - success or an accumulated list of errors.
//!
//! `Validated<A, E>` looks like `Result<A, E>` but combines differently:
//! zipping two invalid values keeps *both* error lists, left before right,
//! instead of stopping at one. Use `Result` when later checks are meaningless
//! once one fails; use `Validated` when every problem should be reported, as
//! in form validation.
//!
//! # Examples
//!
//! ```rust
//! use zipwise::control::{Validated, ValidatedKind};
//! use zipwise::typeclass::Zip;
//!
//! fn non_negative(value: f64, label: &str) -> Validated<f64, String> {
//!     if value < 0.0 {
//!         Validated::invalid(format!("{label} must be non-negative."))
//!     } else {
//!         Validated::valid(value)
//!     }
//! }
//!
//! let compute = |a: f64, b: f64| a.sqrt() + b.sqrt();
//!
//! let ok = ValidatedKind::zip2_with(non_negative(4.0, "first"), non_negative(9.0, "second"), compute);
//! assert_eq!(ok, Validated::valid(5.0));
//!
//! let both_bad = ValidatedKind::zip2_with(non_negative(-1.0, "first"), non_negative(-3.0, "second"), compute);
//! assert_eq!(
//!     both_bad.errors().map(|errors| errors.len()),
//!     Some(2)
//! );
//! ```

use std::marker::PhantomData;

use super::nonempty::NonEmpty;
use crate::typeclass::{Functor, Kind, Semigroup, Sequence, Zip};

/// A value that is either valid or carries one or more errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<A, E> {
    /// A successfully validated value.
    Valid(A),
    /// Every error found, in the order they were found.
    Invalid(NonEmpty<E>),
}

impl<A, E> Validated<A, E> {
    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value with a single error.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(NonEmpty::singleton(error))
    }

    /// Creates an invalid value with the given errors.
    #[inline]
    pub const fn invalid_all(errors: NonEmpty<E>) -> Self {
        Self::Invalid(errors)
    }

    /// Returns `true` if this is a `Valid` value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if this is an `Invalid` value.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the valid value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the accumulated errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&NonEmpty<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Maps the valid value, leaving errors untouched.
    pub fn fmap<B, F>(self, function: F) -> Validated<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validated::Valid(function(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Maps every error, leaving a valid value untouched.
    pub fn map_errors<F, G>(self, function: G) -> Validated<A, F>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(errors) => Validated::Invalid(errors.fmap(function)),
        }
    }

    /// Converts into a `Result` carrying every error.
    pub fn into_result(self) -> Result<A, NonEmpty<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

impl<A, E> Validated<Option<A>, E> {
    /// Swaps the validation and optional layers.
    ///
    /// `Valid(None)` becomes `None`; `Valid(Some(a))` becomes
    /// `Some(Valid(a))`; errors are kept as `Some(Invalid(errors))`.
    pub fn transpose(self) -> Option<Validated<A, E>> {
        match self {
            Self::Valid(Some(value)) => Some(Validated::Valid(value)),
            Self::Valid(None) => None,
            Self::Invalid(errors) => Some(Validated::Invalid(errors)),
        }
    }
}

impl<A, E> From<Result<A, E>> for Validated<A, E> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

// =============================================================================
// Kind
// =============================================================================

/// Kind marker for `Validated<A, E>` with error accumulation.
pub struct ValidatedKind<E>(PhantomData<fn() -> E>);

impl<E> Kind for ValidatedKind<E> {
    type Of<A> = Validated<A, E>;
}

impl<E> Functor for ValidatedKind<E> {
    #[inline]
    fn fmap<A, B, F>(container: Validated<A, E>, function: F) -> Validated<B, E>
    where
        F: FnMut(A) -> B,
    {
        container.fmap(function)
    }
}

impl<E> Zip for ValidatedKind<E> {
    fn zip2<A, B>(left: Validated<A, E>, right: Validated<B, E>) -> Validated<(A, B), E> {
        match (left, right) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid((a, b)),
            (Validated::Invalid(errors), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
            (Validated::Invalid(left_errors), Validated::Invalid(right_errors)) => {
                Validated::Invalid(left_errors.combine(right_errors))
            }
        }
    }
}

impl<E> Sequence for ValidatedKind<E> {
    #[inline]
    fn empty<A>() -> Validated<Vec<A>, E> {
        Validated::Valid(Vec::new())
    }
}
