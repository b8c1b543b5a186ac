//! Tuple flattening for right-nested zips.
//!
//! Higher-arity zips are built by nesting `zip2` to the right, which produces
//! payloads shaped like `(a, (b, c))`. These functions flatten such payloads
//! into plain tuples.
//!
//! ```rust
//! use zipwise::typeclass::{unpack3, unpack4};
//!
//! assert_eq!(unpack3((1, ("two", 3.0))), (1, "two", 3.0));
//! assert_eq!(unpack4((1, (2, 3, 4))), (1, 2, 3, 4));
//! ```

/// Flattens `(a, (b, c))` into `(a, b, c)`.
#[inline]
pub fn unpack3<A, B, C>((a, (b, c)): (A, (B, C))) -> (A, B, C) {
    (a, b, c)
}

/// Flattens `(a, (b, c, d))` into `(a, b, c, d)`.
#[inline]
pub fn unpack4<A, B, C, D>((a, (b, c, d)): (A, (B, C, D))) -> (A, B, C, D) {
    (a, b, c, d)
}

/// Flattens `(a, (b, c, d, e))` into `(a, b, c, d, e)`.
#[inline]
pub fn unpack5<A, B, C, D, E>((a, (b, c, d, e)): (A, (B, C, D, E))) -> (A, B, C, D, E) {
    (a, b, c, d, e)
}

/// Flattens a left-nested pair `((a, b), c)` into `(a, b, c)`.
///
/// Useful to compare `zip2(zip2(a, b), c)` against `zip3(a, b, c)`.
#[inline]
pub fn unpack3_left<A, B, C>(((a, b), c): ((A, B), C)) -> (A, B, C) {
    (a, b, c)
}
