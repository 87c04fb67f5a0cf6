//! Mutable hash set with set algebra.
//!
//! This module provides [`Set`], an unordered collection of unique elements
//! stored as keys of a hash map with a `()` presence marker.
//!
//! # Overview
//!
//! - O(1) average `add`, `remove`, `contains`
//! - O(1) `cardinality` and `is_empty`
//! - Derived sets (`union`, `intersect`, `difference`,
//!   `symmetric_difference`, `power_set`, `cartesian_product`) are freshly
//!   allocated; mutating a derived set never affects its operands.
//!
//! Iteration order is unspecified and may differ between two traversals of
//! the same set.
//!
//! # Examples
//!
//! ```rust
//! use setwise::Set;
//!
//! let mut set = Set::new();
//! set.add(1);
//! set.add_many([2, 3]);
//!
//! assert!(set.contains(&1));
//! assert!(set.contains_all([2, 3].iter()));
//! assert!(!set.contains(&4));
//! assert_eq!(set.cardinality(), 3);
//!
//! set.remove(&1).unwrap();
//! assert!(set.remove(&1).is_err());
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setwise::Set;
//!
//! let set_a = Set::from_elements([1, 2, 3]);
//! let set_b = Set::from_elements([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                          // {1, 2, 3, 4}
//! let intersection = set_a.intersect(&set_b);               // {2, 3}
//! let difference = set_a.difference(&set_b);                // {1}
//! let symmetric_diff = set_a.symmetric_difference(&set_b);  // {1, 4}
//!
//! assert_eq!(union.cardinality(), 4);
//! assert_eq!(intersection.cardinality(), 2);
//! assert_eq!(difference.cardinality(), 1);
//! assert_eq!(symmetric_diff.cardinality(), 2);
//! ```

mod power;
mod traversal;

pub use traversal::SetIterator;
#[cfg(feature = "async")]
pub use traversal::SetStream;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{self, DefaultHasher};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::element::{Element, Elements};
use crate::error::SetError;

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hash builder used for set storage.
///
/// `ahash::RandomState` with the `ahash` feature, `rustc_hash::FxBuildHasher`
/// with the `fxhash` feature, the standard `RandomState` otherwise.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used for set storage.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used for set storage.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Computes the hash of an element using `DefaultHasher` with fixed keys.
///
/// Independent of the storage hasher, so two equal sets always produce the
/// same combined hash regardless of their per-instance random state.
fn compute_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable, unordered collection of unique elements.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `add`                  | O(1) average      |
/// | `remove`               | O(1) average      |
/// | `contains`             | O(1) average      |
/// | `cardinality`          | O(1)              |
/// | `union`                | O(n + m)          |
/// | `intersect`            | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `power_set`            | O(2^n)            |
/// | `cartesian_product`    | O(n * m)          |
///
/// # Nesting
///
/// `Set<T>` implements [`Hash`] and [`Eq`] by content, so sets can be
/// elements of other sets. [`Set::power_set`] relies on this.
///
/// # Examples
///
/// ```rust
/// use setwise::{Set, set};
///
/// let set = set![1, 2, 3];
/// assert_eq!(set.cardinality(), 3);
///
/// let mut nested: Set<Set<i32>> = Set::new();
/// nested.add(set.clone());
/// nested.add(set![3, 2, 1]);
/// assert_eq!(nested.cardinality(), 1);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashMap<T, (), DefaultHashBuilder>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.inner.len()
    }

    /// Alias of [`Set::cardinality`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all elements, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let mut set = Set::from_elements([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Shrinks the backing storage as much as possible.
    pub fn shrink_to_fit(&mut self)
    where
        T: Eq + Hash,
    {
        self.inner.shrink_to_fit();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize)
    where
        T: Eq + Hash,
    {
        self.inner.reserve(additional);
    }

    /// Returns a borrowing iterator over the elements, in unspecified order.
    #[inline]
    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter {
            inner: self.inner.keys(),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set pre-populated from any sequence of elements.
    ///
    /// Duplicates in the input collapse into a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set = Set::from_elements(["a", "b", "a"]);
    /// assert_eq!(set.cardinality(), 2);
    /// ```
    #[must_use]
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let mut set = Self::with_capacity(elements.size_hint().0);
        set.add_many(elements);
        set
    }

    /// Adds one element.
    ///
    /// Returns `true` if the element was not already present. Adding an
    /// existing element leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.cardinality(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.inner.insert(element, ()).is_none()
    }

    /// Adds every element of a sequence.
    ///
    /// Returns `true` if at least one element was newly inserted.
    pub fn add_many<I: IntoIterator<Item = T>>(&mut self, elements: I) -> bool {
        elements
            .into_iter()
            .fold(false, |inserted, element| self.add(element) || inserted)
    }

    /// Adds every element of a sequence of boxed [`Element`]s, unboxing them.
    ///
    /// Returns `true` if at least one element was newly inserted.
    pub fn add_elements<I: IntoIterator<Item = Element<T>>>(&mut self, elements: I) -> bool {
        self.add_many(elements.into_iter().map(Element::into_inner))
    }

    /// Removes one element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if the element is not in the set. Unlike
    /// [`std::collections::HashSet::remove`], removing an absent element is an
    /// error rather than a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::{Set, SetError};
    ///
    /// let mut set = Set::from_elements([1, 2]);
    /// assert_eq!(set.remove(&1), Ok(()));
    /// assert_eq!(set.remove(&1), Err(SetError::NotFound));
    /// assert_eq!(set.cardinality(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Result<(), SetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).ok_or(SetError::NotFound)
    }

    /// Removes and returns an arbitrary element, or `None` if the set is empty.
    ///
    /// No guarantee is made about which element is chosen.
    ///
    /// # Complexity
    ///
    /// Each call scans the table from its first bucket, skipping slots
    /// emptied by earlier pops, so draining a whole set with repeated `pop`
    /// is O(n^2) in the worst case. Use [`IntoIterator`] or [`Set::clear`]
    /// to empty a large set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let mut set = Set::from_elements([7]);
    /// assert_eq!(set.pop(), Some(7));
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.inner
            .extract_if(|_, _| true)
            .next()
            .map(|(element, ())| element)
    }

    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Returns `true` if every supplied element is in the set.
    ///
    /// Vacuously `true` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set = Set::from_elements([1, 2, 3]);
    /// assert!(set.contains_all([1, 3].iter()));
    /// assert!(!set.contains_all([1, 4].iter()));
    /// assert!(set.contains_all(std::iter::empty::<&i32>()));
    /// ```
    #[must_use]
    pub fn contains_all<'q, Q, I>(&self, elements: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Returns `true` if both sets hold exactly the same elements.
    ///
    /// Insertion order is irrelevant.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality()
            && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.cardinality() > other.cardinality() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && !self.equal(other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a superset of `other` and the two differ.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self.is_superset(other) && !self.equal(other)
    }

    /// Returns `true` if the two sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.cardinality() <= other.cardinality() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns a new set holding the elements of either set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union, Set::from_elements([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.cardinality().max(other.cardinality()));
        result.add_many(self.iter().cloned());
        result.add_many(other.iter().cloned());
        result
    }

    /// Returns a new set holding the elements present in both sets.
    ///
    /// # Complexity
    ///
    /// O(min(n, m)): the smaller operand is scanned, the larger probed.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.cardinality() < other.cardinality() {
            (self, other)
        } else {
            (other, self)
        };

        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set holding the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set holding the elements that are in exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        // (A - B) ∪ (B - A)
        let a_minus_b = self.difference(other);
        let b_minus_a = other.difference(self);
        a_minus_b.union(&b_minus_a)
    }

    /// Returns the elements as a vector, in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the elements as a list of boxed [`Element`]s.
    #[must_use]
    pub fn to_elements(&self) -> Elements<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
pub struct SetIter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

// Order-independent: per-element hashes are combined with a commutative sum.
impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .inner
            .keys()
            .map(|element| compute_hash(element))
            .fold(0_u64, u64::wrapping_add);
        state.write_usize(self.inner.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
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

impl<T: Clone + Eq + Hash> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: Clone + Eq + Hash> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersect(other)
    }
}

impl<T: Clone + Eq + Hash> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Clone + Eq + Hash> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

/// Builds a [`Set`] from a list of elements.
///
/// # Examples
///
/// ```rust
/// use setwise::{Set, set};
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.cardinality(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Set::from_elements([$($element),+])
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set = Set::from_elements([42]);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = Set::from_elements([1, 2, 3]);
        let display = format!("{set}");
        // Unordered, so only the shape and members are checked
        assert!(display.starts_with('{'));
        assert!(display.ends_with('}'));
        assert!(display.contains('1'));
        assert!(display.contains('2'));
        assert!(display.contains('3'));
        assert_eq!(display.matches(", ").count(), 2);
    }

    // =========================================================================
    // Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_add_reports_new_elements() {
        let mut set = Set::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.cardinality(), 1);
    }

    #[rstest]
    fn test_add_many_reports_any_new_element() {
        let mut set = Set::from_elements([1, 2]);
        assert!(!set.add_many([1, 2]));
        assert!(set.add_many([2, 3]));
        assert_eq!(set.cardinality(), 3);
    }

    #[rstest]
    fn test_add_elements_unboxes() {
        let mut set = Set::new();
        set.add_elements([Element(1), Element(2), Element(1)]);
        assert_eq!(set, Set::from_elements([1, 2]));
    }

    #[rstest]
    fn test_remove_present_then_absent() {
        let mut set = Set::from_elements([1, 2, 3]);
        assert_eq!(set.remove(&2), Ok(()));
        assert_eq!(set.cardinality(), 2);
        assert_eq!(set.remove(&2), Err(SetError::NotFound));
        assert_eq!(set.cardinality(), 2);
    }

    #[rstest]
    fn test_remove_with_borrowed_form() {
        let mut set = Set::from_elements(["hello".to_string()]);
        assert!(set.remove("hello").is_ok());
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_clear_keeps_set_usable() {
        let mut set = Set::from_elements([1, 2, 3]);
        set.clear();
        assert!(set.is_empty());
        set.add(4);
        assert_eq!(set, Set::from_elements([4]));
    }

    #[rstest]
    fn test_pop_drains_every_element_once() {
        let mut set = Set::from_elements([1, 2, 3]);
        let mut popped = Vec::new();
        while let Some(element) = set.pop() {
            popped.push(element);
        }
        popped.sort_unstable();
        assert_eq!(popped, vec![1, 2, 3]);
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_pop_empty_returns_none() {
        let mut set: Set<String> = Set::new();
        assert_eq!(set.pop(), None);
    }

    // =========================================================================
    // Comparison Tests
    // =========================================================================

    #[rstest]
    fn test_contains_all_is_vacuous_for_empty_input() {
        let set: Set<i32> = Set::new();
        assert!(set.contains_all(std::iter::empty::<&i32>()));
    }

    #[rstest]
    #[case(&[1, 2], &[1, 2, 3], true, true)]
    #[case(&[1, 2, 3], &[1, 2, 3], true, false)]
    #[case(&[1, 4], &[1, 2, 3], false, false)]
    #[case(&[], &[1], true, true)]
    fn test_subset_relations(
        #[case] left: &[i32],
        #[case] right: &[i32],
        #[case] subset: bool,
        #[case] proper: bool,
    ) {
        let left: Set<i32> = left.iter().copied().collect();
        let right: Set<i32> = right.iter().copied().collect();
        assert_eq!(left.is_subset(&right), subset);
        assert_eq!(left.is_proper_subset(&right), proper);
        assert_eq!(right.is_superset(&left), subset);
        assert_eq!(right.is_proper_superset(&left), proper);
    }

    #[rstest]
    fn test_is_disjoint() {
        let set_a = Set::from_elements([1, 2]);
        assert!(set_a.is_disjoint(&Set::from_elements([3, 4])));
        assert!(!set_a.is_disjoint(&Set::from_elements([2, 3])));
    }

    // =========================================================================
    // Algebra Tests
    // =========================================================================

    #[rstest]
    fn test_union() {
        let set_a = Set::from_elements([1, 2]);
        let set_b = Set::from_elements([2, 3]);
        assert_eq!(set_a.union(&set_b), Set::from_elements([1, 2, 3]));
    }

    #[rstest]
    fn test_intersect() {
        let set_a = Set::from_elements([1, 2, 3]);
        let set_b = Set::from_elements([2, 3, 4, 5]);
        assert_eq!(set_a.intersect(&set_b), Set::from_elements([2, 3]));
        assert_eq!(set_b.intersect(&set_a), Set::from_elements([2, 3]));
    }

    #[rstest]
    fn test_difference() {
        let set_a = Set::from_elements([1, 2, 3]);
        let set_b = Set::from_elements([2, 3, 4]);
        assert_eq!(set_a.difference(&set_b), Set::from_elements([1]));
    }

    #[rstest]
    fn test_symmetric_difference() {
        let set_a = Set::from_elements([1, 2, 3]);
        let set_b = Set::from_elements([2, 3, 4]);
        assert_eq!(set_a.symmetric_difference(&set_b), Set::from_elements([1, 4]));
    }

    #[rstest]
    fn test_operators_match_methods() {
        let set_a = Set::from_elements([1, 2, 3]);
        let set_b = Set::from_elements([3, 4]);
        assert_eq!(&set_a | &set_b, set_a.union(&set_b));
        assert_eq!(&set_a & &set_b, set_a.intersect(&set_b));
        assert_eq!(&set_a - &set_b, set_a.difference(&set_b));
        assert_eq!(&set_a ^ &set_b, set_a.symmetric_difference(&set_b));
    }

    #[rstest]
    fn test_derived_set_is_independent() {
        let set_a = Set::from_elements([1]);
        let set_b = Set::from_elements([2]);
        let mut union = set_a.union(&set_b);
        union.add(3);
        assert_eq!(set_a.cardinality(), 1);
        assert_eq!(set_b.cardinality(), 1);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = Set::from_elements([1, 2]);
        let mut cloned = original.clone();
        cloned.add(3);
        assert_eq!(original.cardinality(), 2);
        assert_eq!(cloned.cardinality(), 3);
    }

    // =========================================================================
    // Hash Tests
    // =========================================================================

    #[rstest]
    fn test_equal_sets_hash_equally() {
        let set_a: Set<i32> = (0..100).collect();
        let set_b: Set<i32> = (0..100).rev().collect();
        assert_eq!(compute_hash(&set_a), compute_hash(&set_b));
    }

    #[rstest]
    fn test_sets_nest_by_content() {
        let mut nested: Set<Set<i32>> = Set::new();
        assert!(nested.add(Set::from_elements([1, 2])));
        assert!(!nested.add(Set::from_elements([2, 1])));
        assert!(nested.add(Set::new()));
        assert_eq!(nested.cardinality(), 2);
        assert!(nested.contains(&Set::from_elements([1, 2])));
    }

    #[rstest]
    fn test_set_macro() {
        let set = set![1, 2, 2];
        assert_eq!(set.cardinality(), 2);
        let empty: Set<u8> = set![];
        assert!(empty.is_empty());
    }

    #[rstest]
    fn test_to_elements_round_trip() {
        let set = Set::from_elements(["x", "y"]);
        assert_eq!(set.to_elements().to_set(), set);
        let mut as_vec = set.to_vec();
        as_vec.sort_unstable();
        assert_eq!(as_vec, vec!["x", "y"]);
    }
}
