//! Higher-Kinded Type emulation through kind markers.
//!
//! Rust does not natively support Higher-Kinded Types, so we cannot write a
//! trait that abstracts over `Option<_>` and `Vec<_>` as type constructors.
//! This module works around the limitation with zero-sized *kind markers*:
//! each marker names a container shape and maps any payload type `A` to the
//! concrete container through a Generic Associated Type.
//!
//! Keeping the kind in a separate marker (instead of on the container itself)
//! makes the choice of combination rule explicit at the call site. The same
//! `Result<A, E>` can be zipped under [`FirstFailure`] or [`LastFailure`]
//! simply by naming a different marker.
//!
//! # Example
//!
//! ```rust
//! use zipwise::typeclass::{Kind, OptionKind, VecKind};
//!
//! fn empty_vec<K: Kind<Of<i32> = Vec<i32>>>() -> K::Of<i32> {
//!     Vec::new()
//! }
//!
//! let some: <OptionKind as Kind>::Of<i32> = Some(1);
//! assert_eq!(some, Some(1));
//! assert!(empty_vec::<VecKind>().is_empty());
//! ```
//!
//! [`FirstFailure`]: super::FirstFailure
//! [`LastFailure`]: super::LastFailure

use std::marker::PhantomData;

use super::policy::{FailurePolicy, FirstFailure};

/// A marker for a type constructor.
///
/// # Laws
///
/// For any `K: Kind`, `K::Of<A>` must be the same container shape for every
/// `A`; only the payload type changes.
pub trait Kind {
    /// The container shape applied to the payload type `A`.
    type Of<A>;
}

/// Kind marker for `Option<A>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

impl Kind for OptionKind {
    type Of<A> = Option<A>;
}

/// Kind marker for `Vec<A>` under positional (zip-list) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecKind;

impl Kind for VecKind {
    type Of<A> = Vec<A>;
}

/// Kind marker for `Result<A, E>`.
///
/// The policy parameter `P` decides which error survives when both operands
/// of a zip fail. It defaults to [`FirstFailure`].
pub struct ResultKind<E, P = FirstFailure>(PhantomData<(fn() -> E, P)>);

impl<E, P: FailurePolicy> Kind for ResultKind<E, P> {
    type Of<A> = Result<A, E>;
}

/// Kind marker for the composition of two kinds, `F::Of<G::Of<A>>`.
///
/// Zipping a composed kind zips the outer layer with `F` and the inner layer
/// with `G`, e.g. `Compose<OptionKind, VecKind>` zips two `Option<Vec<A>>`.
pub struct Compose<F, G>(PhantomData<(F, G)>);

impl<F: Kind, G: Kind> Kind for Compose<F, G> {
    type Of<A> = F::Of<G::Of<A>>;
}
