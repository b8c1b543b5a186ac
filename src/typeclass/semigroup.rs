//! Semigroup type class - types with an associative binary operation.
//!
//! Error accumulation is a semigroup: `Validated` concatenates its error
//! lists with `combine`, and the `Result` failure policies are the [`First`]
//! and [`Last`] semigroups.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use zipwise::typeclass::{First, Last, Semigroup};
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//!
//! assert_eq!(First("a").combine(First("b")), First("a"));
//! assert_eq!(Last("a").combine(Last("b")), Last("b"));
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// First / Last
// =============================================================================

/// Semigroup that always keeps the left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<T>(pub T);

impl<T> Semigroup for First<T> {
    #[inline]
    fn combine(self, _other: Self) -> Self {
        self
    }
}

/// Semigroup that always keeps the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<T>(pub T);

impl<T> Semigroup for Last<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        other
    }
}
