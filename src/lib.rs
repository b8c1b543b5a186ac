//! # zipwise
//!
//! Applicative combination ("zip") and inversion ("sequence") for containers.
//!
//! ## Overview
//!
//! Combining *independent* computations is the same problem whatever the
//! container: two optional values, two results, two validations, two readers
//! of a configuration, two values that arrive later from other threads. This
//! library gives every one of them the same vocabulary:
//!
//! - `zip2`, `zip3` (and `zip4`, `zip5`): combine containers into a container
//!   of a tuple
//! - `zip2_with`, `zip3_with`: the same, followed by a mapping function
//! - `sequence`, `traverse`: turn a list of containers into a container of a
//!   list
//!
//! | Container | Combination rule |
//! |---|---|
//! | `Option<A>` | present only if every input is present |
//! | `Vec<A>` | positional pairing, truncated to the shortest input |
//! | `Result<A, E>` | first failure short-circuits (policy selectable) |
//! | [`Validated<A, E>`](control::Validated) | every error is accumulated, left to right |
//! | [`Reader<R, A>`](effect::Reader) | every input reads the same environment |
//! | [`AsyncCell<A>`](control::AsyncCell) | fulfilled once every input has been |
//!
//! ## Feature Flags
//!
//! - `typeclass`: Kind markers and the `Functor`, `Zip`, `Sequence` traits
//! - `control`: `NonEmpty`, `Validated` and `AsyncCell`
//! - `effect`: `Reader`
//! - `async`: `AsyncCell::wait` as a `Future`
//! - `serde`: `Serialize`/`Deserialize` for `NonEmpty` and `Validated`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use zipwise::prelude::*;
//!
//! let parsed: Vec<Option<u8>> = ["1", "2", "3"].iter().map(|text| text.parse().ok()).collect();
//! assert_eq!(OptionKind::sequence(parsed), Some(vec![1, 2, 3]));
//!
//! let total = OptionKind::zip3_with(Some(1), Some(2), Some(3), |a, b, c| a + b + c);
//! assert_eq!(total, Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every type and trait of the enabled features.
///
/// # Usage
///
/// ```rust
/// use zipwise::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(all(test, feature = "full"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_reaches_every_kind() {
        assert_eq!(OptionKind::zip2(Some(1), Some('a')), Some((1, 'a')));
        assert_eq!(
            ValidatedKind::<&str>::zip2(Validated::valid(1), Validated::valid(2)),
            Validated::valid((1, 2))
        );
        assert_eq!(Reader::<i32, i32>::ask().zip2(Reader::pure(0)).run(5), (5, 0));
        assert_eq!(AsyncCell::fulfilled(3).peek(), Some(3));
    }
}
