//! Boxed element carriers.
//!
//! [`Element`] wraps a single raw value so it can be handed around as a
//! self-contained unit, for example when a set is flattened into a list and
//! later rebuilt. [`Elements`] is the list form produced by
//! [`Set::to_elements`](crate::Set::to_elements).
//!
//! # Examples
//!
//! ```rust
//! use setwise::{Element, Set};
//!
//! let set = Set::from_elements(["a", "b"]);
//! let elements = set.to_elements();
//! assert_eq!(elements.len(), 2);
//!
//! let rebuilt = elements.to_set();
//! assert_eq!(rebuilt, set);
//! assert!(rebuilt.contains(&"a"));
//!
//! let boxed = Element::new(7);
//! assert_eq!(boxed.into_inner(), 7);
//! ```

use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use crate::collection::Set;

// =============================================================================
// Element
// =============================================================================

/// A single element carried in a box.
///
/// Equality, ordering, hashing and formatting all delegate to the wrapped
/// value, so `Element(x) == Element(y)` exactly when `x == y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Element<T>(pub T);

impl<T> Element<T> {
    /// Boxes a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unboxes the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns a reference to the boxed value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Element<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Element<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

// =============================================================================
// Elements
// =============================================================================

/// A list of boxed elements, typically a flattened [`Set`].
///
/// Unlike a set, the list may contain duplicates; they collapse again when
/// the list is turned back into a set with [`Elements::to_set`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Elements<T>(pub Vec<Element<T>>);

impl<T> Elements<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of boxed elements, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a boxed element.
    pub fn push(&mut self, element: Element<T>) {
        self.0.push(element);
    }

    /// Iterates over the boxed elements in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.0.iter()
    }
}

impl<T: Clone + Eq + Hash> Elements<T> {
    /// Rebuilds a set from the list, dropping duplicates.
    #[must_use]
    pub fn to_set(&self) -> Set<T> {
        let mut set = Set::with_capacity(self.len());
        set.add_elements(self.0.iter().cloned());
        set
    }
}

impl<T> From<Vec<Element<T>>> for Elements<T> {
    fn from(elements: Vec<Element<T>>) -> Self {
        Self(elements)
    }
}

impl<T> FromIterator<T> for Elements<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Element).collect())
    }
}

impl<T> IntoIterator for Elements<T> {
    type Item = Element<T>;
    type IntoIter = std::vec::IntoIter<Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Elements<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Elements<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.0 {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
