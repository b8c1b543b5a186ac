//! Non-empty list - an ordered sequence with at least one element.
//!
//! `NonEmpty<T>` stores its first element separately from the rest, so the
//! "at least one" invariant holds by construction rather than by a runtime
//! check. It is the error carrier of [`Validated`](super::Validated):
//! an invalid value always explains itself with one or more errors.
//!
//! Concatenation ([`Semigroup::combine`]) keeps every element of the left
//! operand before every element of the right operand.
//!
//! # Examples
//!
//! ```rust
//! use zipwise::control::NonEmpty;
//! use zipwise::nonempty;
//! use zipwise::typeclass::Semigroup;
//!
//! let errors = nonempty!["too short", "missing digit"];
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.head(), &"too short");
//!
//! let combined = errors.combine(NonEmpty::singleton("reserved name"));
//! assert_eq!(combined.into_vec(), vec!["too short", "missing digit", "reserved name"]);
//!
//! assert!(NonEmpty::<i32>::from_vec(vec![]).is_none());
//! ```

use std::fmt;

use crate::typeclass::Semigroup;

/// An ordered list with at least one element.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Creates a list from its first element and the remaining elements.
    #[inline]
    pub const fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Creates a list holding exactly one element.
    #[inline]
    pub const fn singleton(head: T) -> Self {
        Self::new(head, Vec::new())
    }

    /// Converts a `Vec` into a `NonEmpty`, or returns `None` if it is empty.
    pub fn from_vec(mut elements: Vec<T>) -> Option<Self> {
        if elements.is_empty() {
            return None;
        }
        let tail = elements.split_off(1);
        elements.pop().map(|head| Self::new(head, tail))
    }

    /// Returns the first element.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns every element after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the number of elements, which is never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Appends an element at the end.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.tail.push(element);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element, preserving order and length.
    pub fn fmap<U, F>(self, mut function: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        let head = function(self.head);
        NonEmpty::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Converts the list into a `Vec`, first element first.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }
}

impl<T> Semigroup for NonEmpty<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(list: NonEmpty<T>) -> Self {
        list.into_vec()
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmpty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Builds a [`NonEmpty`] from one or more elements.
///
/// ```rust
/// use zipwise::nonempty;
///
/// let list = nonempty![1, 2, 3];
/// assert_eq!(list.into_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! nonempty {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::control::NonEmpty::new($head, vec![$($tail),*])
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmpty<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmpty<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(elements)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"a non-empty sequence"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_vec_splits_head_and_tail() {
        let list = NonEmpty::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(list.head(), &1);
        assert_eq!(list.tail(), &[2, 3]);
        assert_eq!(list.last(), &3);
    }

    #[rstest]
    fn from_vec_rejects_empty() {
        assert_eq!(NonEmpty::<i32>::from_vec(Vec::new()), None);
    }

    #[rstest]
    fn singleton_has_length_one() {
        let list = NonEmpty::singleton("only");
        assert_eq!(list.len(), 1);
        assert_eq!(list.last(), &"only");
    }

    #[rstest]
    fn combine_keeps_left_before_right() {
        let combined = nonempty!["a", "b"].combine(nonempty!["c", "d"]);
        assert_eq!(combined.into_vec(), vec!["a", "b", "c", "d"]);
    }

    #[rstest]
    fn combine_is_associative() {
        let left = nonempty![1].combine(nonempty![2]).combine(nonempty![3]);
        let right = nonempty![1].combine(nonempty![2].combine(nonempty![3]));
        assert_eq!(left, right);
    }

    #[rstest]
    fn fmap_preserves_order() {
        let mapped = nonempty![1, 2, 3].fmap(|x| x * 10);
        assert_eq!(mapped.into_vec(), vec![10, 20, 30]);
    }

    #[rstest]
    fn into_iter_yields_head_first() {
        let collected: Vec<_> = nonempty!['x', 'y'].into_iter().collect();
        assert_eq!(collected, vec!['x', 'y']);
    }

    #[rstest]
    fn debug_renders_as_list() {
        assert_eq!(format!("{:?}", nonempty![1, 2]), "[1, 2]");
    }
}
