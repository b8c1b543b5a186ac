//! Zip type class - combining independent containers.
//!
//! This module provides the `Zip` trait, which extends [`Functor`] with
//! `zip2`: combining two containers of the same kind into one container of a
//! pair. Each kind decides what "both present" means:
//!
//! | Kind | `zip2` succeeds when | on failure |
//! |---|---|---|
//! | [`OptionKind`] | both are `Some` | `None` |
//! | [`VecKind`] | always | truncates to the shorter input |
//! | [`ResultKind`] | both are `Ok` | one error, chosen by the [`FailurePolicy`] |
//! | `ValidatedKind` | both are `Valid` | every error, left before right |
//!
//! Everything else (`zip3`, `zip2_with`, the 4- and 5-ary variants) is a
//! provided method built from `zip2` and `fmap`, so a new kind only has to
//! supply those two.
//!
//! # Laws
//!
//! ## Associativity up to flattening
//!
//! ```text
//! K::zip3(a, b, c)
//!     == K::fmap(K::zip2(K::zip2(a, b), c), |((a, b), c)| (a, b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use zipwise::typeclass::{OptionKind, VecKind, Zip};
//!
//! assert_eq!(OptionKind::zip2(Some(1), Some("a")), Some((1, "a")));
//! assert_eq!(OptionKind::zip2(Some(1), None::<&str>), None);
//!
//! let pairs = VecKind::zip2(vec![1, 2, 3], vec![10, 20]);
//! assert_eq!(pairs, vec![(1, 10), (2, 20)]);
//!
//! let sums = VecKind::zip3_with(vec![1, 2], vec![10, 20], vec![100, 200], |a, b, c| a + b + c);
//! assert_eq!(sums, vec![111, 222]);
//! ```

use super::functor::Functor;
use super::higher::{Compose, OptionKind, ResultKind, VecKind};
use super::policy::FailurePolicy;
use super::unpack::{unpack3, unpack4, unpack5};

/// A type class for kinds whose containers can be zipped together.
///
/// Only [`zip2`](Zip::zip2) is required; every other method is derived from
/// it and [`Functor::fmap`].
pub trait Zip: Functor {
    /// Combines two containers into a container of pairs.
    fn zip2<A, B>(left: Self::Of<A>, right: Self::Of<B>) -> Self::Of<(A, B)>;

    /// Combines two containers and transforms each pair with `function`.
    #[inline]
    fn zip2_with<A, B, C, F>(left: Self::Of<A>, right: Self::Of<B>, mut function: F) -> Self::Of<C>
    where
        F: FnMut(A, B) -> C,
    {
        Self::fmap::<(A, B), C, _>(Self::zip2::<A, B>(left, right), move |(a, b)| function(a, b))
    }

    /// Combines three containers into a container of triples.
    ///
    /// Built as `zip2(first, zip2(second, third))` and flattened.
    #[inline]
    fn zip3<A, B, C>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
    ) -> Self::Of<(A, B, C)> {
        let nested = Self::zip2::<A, (B, C)>(first, Self::zip2::<B, C>(second, third));
        Self::fmap::<(A, (B, C)), (A, B, C), _>(nested, unpack3)
    }

    /// Combines three containers and transforms each triple with `function`.
    #[inline]
    fn zip3_with<A, B, C, D, F>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        mut function: F,
    ) -> Self::Of<D>
    where
        F: FnMut(A, B, C) -> D,
    {
        Self::fmap::<(A, B, C), D, _>(Self::zip3::<A, B, C>(first, second, third), move |(a, b, c)| {
            function(a, b, c)
        })
    }

    /// Combines four containers into a container of 4-tuples.
    fn zip4<A, B, C, D>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        fourth: Self::Of<D>,
    ) -> Self::Of<(A, B, C, D)> {
        let nested = Self::zip2::<A, (B, C, D)>(first, Self::zip3::<B, C, D>(second, third, fourth));
        Self::fmap::<(A, (B, C, D)), (A, B, C, D), _>(nested, unpack4)
    }

    /// Combines four containers and transforms each 4-tuple with `function`.
    fn zip4_with<A, B, C, D, Output, F>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        fourth: Self::Of<D>,
        mut function: F,
    ) -> Self::Of<Output>
    where
        F: FnMut(A, B, C, D) -> Output,
    {
        Self::fmap::<(A, B, C, D), Output, _>(
            Self::zip4::<A, B, C, D>(first, second, third, fourth),
            move |(a, b, c, d)| function(a, b, c, d),
        )
    }

    /// Combines five containers into a container of 5-tuples.
    fn zip5<A, B, C, D, E>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        fourth: Self::Of<D>,
        fifth: Self::Of<E>,
    ) -> Self::Of<(A, B, C, D, E)> {
        let nested = Self::zip2::<A, (B, C, D, E)>(
            first,
            Self::zip4::<B, C, D, E>(second, third, fourth, fifth),
        );
        Self::fmap::<(A, (B, C, D, E)), (A, B, C, D, E), _>(nested, unpack5)
    }

    /// Combines five containers and transforms each 5-tuple with `function`.
    fn zip5_with<A, B, C, D, E, Output, F>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        fourth: Self::Of<D>,
        fifth: Self::Of<E>,
        mut function: F,
    ) -> Self::Of<Output>
    where
        F: FnMut(A, B, C, D, E) -> Output,
    {
        Self::fmap::<(A, B, C, D, E), Output, _>(
            Self::zip5::<A, B, C, D, E>(first, second, third, fourth, fifth),
            move |(a, b, c, d, e)| function(a, b, c, d, e),
        )
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Zip for OptionKind {
    #[inline]
    fn zip2<A, B>(left: Option<A>, right: Option<B>) -> Option<(A, B)> {
        match (left, right) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Zip for VecKind {
    /// Pairs elements by position; the longer input's tail is dropped.
    #[inline]
    fn zip2<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(A, B)> {
        left.into_iter().zip(right).collect()
    }
}

// =============================================================================
// Result<A, E> Implementation
// =============================================================================

impl<E, P: FailurePolicy> Zip for ResultKind<E, P> {
    fn zip2<A, B>(left: Result<A, E>, right: Result<B, E>) -> Result<(A, B), E> {
        match (left, right) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
            (Err(left_error), Err(right_error)) => Err(P::resolve(left_error, right_error)),
        }
    }
}

// =============================================================================
// Compose<F, G> Implementation
// =============================================================================

impl<Outer: Zip, Inner: Zip> Zip for Compose<Outer, Inner> {
    /// Zips the outer layers, then the inner layers of each outer pair.
    fn zip2<A, B>(left: Self::Of<A>, right: Self::Of<B>) -> Self::Of<(A, B)> {
        Outer::zip2_with::<Inner::Of<A>, Inner::Of<B>, Inner::Of<(A, B)>, _>(
            left,
            right,
            Inner::zip2::<A, B>,
        )
    }
}

/// Splits a list of pairs into a pair of lists, the inverse of `VecKind::zip2`.
///
/// ```rust
/// use zipwise::typeclass::{VecKind, Zip, unzip2};
///
/// let pairs = VecKind::zip2(vec![1, 2], vec!['a', 'b']);
/// assert_eq!(unzip2(pairs), (vec![1, 2], vec!['a', 'b']));
/// ```
pub fn unzip2<A, B>(pairs: Vec<(A, B)>) -> (Vec<A>, Vec<B>) {
    pairs.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::LastFailure;
    use rstest::rstest;

    type Checked = ResultKind<String>;
    type CheckedLast = ResultKind<String, LastFailure>;

    // =========================================================================
    // Option
    // =========================================================================

    #[rstest]
    #[case(Some(1), Some('a'), Some((1, 'a')))]
    #[case(Some(1), None, None)]
    #[case(None, Some('a'), None)]
    #[case(None, None, None)]
    fn option_zip2_requires_both(
        #[case] left: Option<i32>,
        #[case] right: Option<char>,
        #[case] expected: Option<(i32, char)>,
    ) {
        assert_eq!(OptionKind::zip2(left, right), expected);
    }

    #[rstest]
    fn option_zip3_flattens() {
        assert_eq!(
            OptionKind::zip3(Some(1), Some("two"), Some(3.0)),
            Some((1, "two", 3.0))
        );
    }

    #[rstest]
    fn option_zip2_with_applies_function() {
        assert_eq!(OptionKind::zip2_with(Some(2), Some(3), |a, b| a * b), Some(6));
    }

    #[rstest]
    fn option_zip5_with_absent_member_is_absent() {
        let result = OptionKind::zip5_with(Some(1), Some(2), None, Some(4), Some(5), |a, b, c: i32, d, e| {
            a + b + c + d + e
        });
        assert_eq!(result, None);
    }

    // =========================================================================
    // Vec
    // =========================================================================

    #[rstest]
    fn vec_zip2_truncates_to_shorter() {
        assert_eq!(
            VecKind::zip2(vec![1, 2, 3], vec![10, 20]),
            vec![(1, 10), (2, 20)]
        );
    }

    #[rstest]
    fn vec_zip2_with_empty_is_empty() {
        assert!(VecKind::zip2(Vec::<i32>::new(), vec![1, 2]).is_empty());
    }

    #[rstest]
    fn unzip2_inverts_equal_length_zip() {
        let pairs = VecKind::zip2(vec![1, 2, 3], vec!["a", "b", "c"]);
        assert_eq!(unzip2(pairs), (vec![1, 2, 3], vec!["a", "b", "c"]));
    }

    #[rstest]
    fn vec_zip4_uses_shortest_length() {
        let zipped = VecKind::zip4(vec![1, 2, 3], vec!['a', 'b'], vec![true, false, true], vec![0.5, 1.5, 2.5]);
        assert_eq!(zipped, vec![(1, 'a', true, 0.5), (2, 'b', false, 1.5)]);
    }

    // =========================================================================
    // Result
    // =========================================================================

    #[rstest]
    fn result_zip2_success_and_failure_returns_failure() {
        let left: Result<i32, String> = Ok(3);
        let right: Result<i32, String> = Err("boom".to_string());
        assert_eq!(Checked::zip2(left, right), Err("boom".to_string()));
    }

    #[rstest]
    fn result_zip2_left_failure_wins_by_default() {
        let left: Result<i32, String> = Err("first".to_string());
        let right: Result<i32, String> = Err("second".to_string());
        assert_eq!(Checked::zip2(left, right), Err("first".to_string()));
    }

    #[rstest]
    fn result_zip2_last_failure_policy_keeps_right() {
        let left: Result<i32, String> = Err("first".to_string());
        let right: Result<i32, String> = Err("second".to_string());
        assert_eq!(CheckedLast::zip2(left, right), Err("second".to_string()));
    }

    #[rstest]
    fn result_zip3_with_all_success() {
        let result = Checked::zip3_with(Ok(1), Ok(2), Ok(3), |a, b, c| a + b + c);
        assert_eq!(result, Ok(6));
    }

    // =========================================================================
    // Compose
    // =========================================================================

    #[rstest]
    fn compose_option_vec_zips_both_layers() {
        let left = Some(vec![1, 2, 3]);
        let right = Some(vec!["a", "b"]);
        assert_eq!(
            Compose::<OptionKind, VecKind>::zip2(left, right),
            Some(vec![(1, "a"), (2, "b")])
        );
    }

    #[rstest]
    fn compose_option_vec_absent_outer_is_absent() {
        let left = Some(vec![1, 2, 3]);
        let right: Option<Vec<&str>> = None;
        assert_eq!(Compose::<OptionKind, VecKind>::zip2(left, right), None);
    }

    #[rstest]
    fn compose_vec_option_zips_positionally_then_optionally() {
        let left = vec![Some(1), None, Some(3)];
        let right = vec![Some('a'), Some('b'), Some('c'), Some('d')];
        assert_eq!(
            Compose::<VecKind, OptionKind>::zip2(left, right),
            vec![Some((1, 'a')), None, Some((3, 'c'))]
        );
    }
}
