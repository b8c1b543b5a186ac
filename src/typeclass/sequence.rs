//! Sequence type class - turning a list of containers inside out.
//!
//! `sequence` converts `Vec<K::Of<A>>` into `K::Of<Vec<A>>`. It is a right
//! fold of [`Zip::zip2_with`] over the input, seeded with the kind's identity
//! container ([`Sequence::empty`]). Because it is nothing but repeated
//! `zip2`, the failure behaviour is inherited from the kind:
//!
//! - a list of `Option`s is `None` as soon as one element is `None`,
//! - a list of `Result`s reports a single error chosen by the failure policy,
//! - a list of `Validated`s reports every error, in input order,
//! - a list of `Vec`s is transposed, truncated to the shortest row.
//!
//! # Examples
//!
//! ```rust
//! use zipwise::typeclass::{OptionKind, ResultKind, Sequence, VecKind};
//!
//! assert_eq!(OptionKind::sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(OptionKind::sequence(vec![Some(1), None, Some(3)]), None);
//!
//! let parsed = <ResultKind<String>>::traverse(vec!["1", "x", "3"], |text| {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}"))
//! });
//! assert_eq!(parsed, Err("not a number: x".to_string()));
//!
//! let transposed = VecKind::sequence(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(transposed, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
//! ```

use super::higher::{OptionKind, ResultKind, VecKind};
use super::policy::FailurePolicy;
use super::zip::Zip;

/// A type class for kinds that can invert a list of containers.
pub trait Sequence: Zip {
    /// The identity container holding an empty list.
    ///
    /// `sequence(vec![])` returns this value.
    fn empty<A>() -> Self::Of<Vec<A>>;

    /// Turns a list of containers into a container of a list.
    fn sequence<A>(containers: Vec<Self::Of<A>>) -> Self::Of<Vec<A>> {
        fold_right::<Self, A>(containers, Self::empty::<A>())
    }

    /// Maps each element into a container and sequences the results.
    fn traverse<T, A, F>(items: Vec<T>, function: F) -> Self::Of<Vec<A>>
    where
        F: FnMut(T) -> Self::Of<A>,
    {
        Self::sequence::<A>(items.into_iter().map(function).collect())
    }
}

/// Right fold of `zip2_with` that prepends each element to the seed's list.
///
/// The payload is accumulated back to front and reversed when the head
/// element is combined, so every step is a push.
pub(crate) fn fold_right<K, A>(containers: Vec<K::Of<A>>, seed: K::Of<Vec<A>>) -> K::Of<Vec<A>>
where
    K: Zip + ?Sized,
{
    let head_position = containers.len().saturating_sub(1);
    containers
        .into_iter()
        .rev()
        .enumerate()
        .fold(seed, |accumulated, (position, container)| {
            K::zip2_with::<A, Vec<A>, Vec<A>, _>(container, accumulated, move |element, mut reversed| {
                reversed.push(element);
                if position == head_position {
                    reversed.reverse();
                }
                reversed
            })
        })
}

impl Sequence for OptionKind {
    #[inline]
    fn empty<A>() -> Option<Vec<A>> {
        Some(Vec::new())
    }
}

impl<E, P: FailurePolicy> Sequence for ResultKind<E, P> {
    #[inline]
    fn empty<A>() -> Result<Vec<A>, E> {
        Ok(Vec::new())
    }
}

impl Sequence for VecKind {
    /// No rows.
    ///
    /// The positional identity is an endless repetition of empty rows, which
    /// cannot be materialised; `sequence` instead seeds one empty row per
    /// column of the shortest input.
    #[inline]
    fn empty<A>() -> Vec<Vec<A>> {
        Vec::new()
    }

    fn sequence<A>(rows: Vec<Vec<A>>) -> Vec<Vec<A>> {
        let width = rows.iter().map(Vec::len).min().unwrap_or(0);
        let height = rows.len();
        let seed = (0..width).map(|_| Vec::with_capacity(height)).collect();
        fold_right::<Self, A>(rows, seed)
    }
}
