//! Ordered pairs, the elements of a Cartesian product.

use std::fmt;

/// An immutable 2-tuple `(first, second)`.
///
/// Equality is positional: `(a, b) == (c, d)` iff `a == c` and `b == d`, so
/// `(1, 2)` and `(2, 1)` are different pairs.
///
/// # Examples
///
/// ```rust
/// use setwise::OrderedPair;
///
/// let pair = OrderedPair::new(1, "x");
/// assert_eq!(pair.first(), &1);
/// assert_eq!(pair.second(), &"x");
/// assert_eq!(format!("{pair}"), "(1, x)");
/// assert_ne!(OrderedPair::new(1, 2), OrderedPair::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedPair<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrderedPair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Splits the pair into a plain tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for OrderedPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for OrderedPair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}
