//! Type class traits for zipping and sequencing containers.
//!
//! - [`Kind`]: Marker trait emulating higher-kinded types
//! - [`Functor`]: Mapping over the payload of a container
//! - [`Zip`]: Combining independent containers into tuples
//! - [`Sequence`]: Turning a list of containers inside out
//! - [`Semigroup`]: Associative binary operations, used for error accumulation
//! - [`FailurePolicy`]: Which error survives when two `Result`s fail
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! module uses zero-sized kind markers with a Generic Associated Type
//! (`Kind::Of<A>`), so the combination rule is always named explicitly:
//!
//! ```rust
//! use zipwise::typeclass::{LastFailure, ResultKind, Zip};
//!
//! let left: Result<i32, &str> = Err("left");
//! let right: Result<i32, &str> = Err("right");
//!
//! assert_eq!(<ResultKind<&str>>::zip2(left, right), Err("left"));
//! assert_eq!(<ResultKind<&str, LastFailure>>::zip2(left, right), Err("right"));
//! ```
//!
//! Kinds for [`Validated`](crate::control::Validated) live next to the type in
//! [`control`](crate::control). [`Reader`](crate::effect::Reader) and
//! [`AsyncCell`](crate::control::AsyncCell) need `'static` and `Send` bounds
//! that a shared trait cannot express, so they provide the same operations as
//! inherent methods.

mod functor;
mod higher;
mod policy;
mod semigroup;
mod sequence;
mod unpack;
mod zip;

pub use functor::Functor;
pub use higher::{Compose, Kind, OptionKind, ResultKind, VecKind};
pub use policy::{FailurePolicy, FirstFailure, LastFailure};
pub use semigroup::{First, Last, Semigroup};
pub use sequence::Sequence;
pub use unpack::{unpack3, unpack3_left, unpack4, unpack5};
pub use zip::{Zip, unzip2};
