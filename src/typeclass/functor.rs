//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents kinds whose
//! containers can have a function applied to their payload while preserving
//! the structure. `fmap` only ever touches the present/success/valid path;
//! absence and failures pass through unchanged.
//!
//! `fmap` is one of the two per-kind primitives of the crate (the other is
//! [`Zip::zip2`](super::Zip::zip2)). Every mapped combinator is built from
//! these two.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! K::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! K::fmap(K::fmap(fa, f), g) == K::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use zipwise::typeclass::{Functor, OptionKind, ResultKind};
//!
//! let transformed = OptionKind::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let failed: Result<i32, &str> = Err("boom");
//! assert_eq!(<ResultKind<&str>>::fmap(failed, |n| n + 1), Err("boom"));
//! ```

use super::higher::{Compose, Kind, OptionKind, ResultKind, VecKind};
use super::policy::FailurePolicy;

/// A type class for kinds whose containers can be mapped over.
///
/// The function is `FnMut` so that multi-element kinds such as [`VecKind`]
/// can call it once per element.
pub trait Functor: Kind {
    /// Applies `function` to the payload of `container`.
    fn fmap<A, B, F>(container: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B;
}

impl Functor for OptionKind {
    #[inline]
    fn fmap<A, B, F>(container: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        container.map(function)
    }
}

impl Functor for VecKind {
    #[inline]
    fn fmap<A, B, F>(container: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        container.into_iter().map(function).collect()
    }
}

impl<E, P: FailurePolicy> Functor for ResultKind<E, P> {
    #[inline]
    fn fmap<A, B, F>(container: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        container.map(function)
    }
}

impl<Outer: Functor, Inner: Functor> Functor for Compose<Outer, Inner> {
    fn fmap<A, B, F>(container: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> B,
    {
        Outer::fmap::<Inner::Of<A>, Inner::Of<B>, _>(container, |inner| {
            Inner::fmap::<A, B, _>(inner, &mut function)
        })
    }
}
