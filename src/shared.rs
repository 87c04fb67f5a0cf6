//! A set that can be shared and mutated across threads.
//!
//! [`Set`] needs `&mut self` to mutate, so the borrow checker already rules
//! out unsynchronized concurrent writes. [`SharedSet`] is for callers who
//! need several threads to mutate one set: every operation takes an internal
//! [`parking_lot::RwLock`] and therefore observes a single consistent
//! snapshot.
//!
//! # Examples
//!
//! ```rust
//! use setwise::SharedSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shared = Arc::new(SharedSet::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|index| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             for value in 0..100 {
//!                 shared.add(index * 100 + value);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(shared.cardinality(), 400);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::error::SetError;
use crate::collection::{Set, SetIterator};

/// A [`Set`] guarded by a read-write lock.
///
/// Binary operations copy `other` under its own read lock before locking
/// `self`, so two locks are never held at once and `shared.union(&shared)`
/// cannot deadlock.
pub struct SharedSet<T> {
    inner: RwLock<Set<T>>,
}

static_assertions::assert_impl_all!(SharedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SharedSet<String>: Send, Sync);

impl<T> SharedSet<T> {
    /// Creates an empty shared set.
    #[must_use]
    pub fn new() -> Self {
        Self::from_set(Set::new())
    }

    /// Wraps an existing set.
    #[must_use]
    pub fn from_set(set: Set<T>) -> Self {
        Self {
            inner: RwLock::new(set),
        }
    }

    /// Unwraps the set.
    pub fn into_inner(self) -> Set<T> {
        self.inner.into_inner()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.inner.read().cardinality()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes all elements.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<T: Eq + Hash> SharedSet<T> {
    /// Adds one element; returns `true` if it was new.
    pub fn add(&self, element: T) -> bool {
        self.inner.write().add(element)
    }

    /// Adds every element under a single write lock; returns `true` if any
    /// was new.
    pub fn add_many<I: IntoIterator<Item = T>>(&self, elements: I) -> bool {
        self.inner.write().add_many(elements)
    }

    /// Removes one element.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if the element is not present.
    pub fn remove<Q>(&self, element: &Q) -> Result<(), SetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(element)
    }

    /// Removes and returns an arbitrary element.
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    /// Returns `true` if the element is present.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(element)
    }

    /// Returns `true` if every supplied element is present.
    #[must_use]
    pub fn contains_all<'q, Q, I>(&self, elements: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        self.inner.read().contains_all(elements)
    }
}

impl<T: Clone + Eq + Hash> SharedSet<T> {
    /// Returns a copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Set<T> {
        self.inner.read().clone()
    }

    /// Returns `true` if both sets hold the same elements.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        let other = other.snapshot();
        self.inner.read().equal(&other)
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        let other = other.snapshot();
        self.inner.read().is_subset(&other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        let other = other.snapshot();
        self.inner.read().is_superset(&other)
    }

    /// Returns a new shared set holding the elements of either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let other = other.snapshot();
        Self::from_set(self.inner.read().union(&other))
    }

    /// Returns a new shared set holding the elements of both sets.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let other = other.snapshot();
        Self::from_set(self.inner.read().intersect(&other))
    }

    /// Returns a new shared set holding the elements of `self` not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let other = other.snapshot();
        Self::from_set(self.inner.read().difference(&other))
    }

    /// Returns a new shared set holding the elements in exactly one set.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let other = other.snapshot();
        Self::from_set(self.inner.read().symmetric_difference(&other))
    }
}

impl<T: Clone + Send + 'static> SharedSet<T> {
    /// Returns a background iterator over the contents at the time of the call.
    ///
    /// The lock is released before the iterator is returned.
    #[must_use]
    pub fn iterator(&self) -> SetIterator<T> {
        self.inner.read().iterator()
    }
}

impl<T> Default for SharedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Set<T>> for SharedSet<T> {
    fn from(set: Set<T>) -> Self {
        Self::from_set(set)
    }
}

impl<T: Clone> Clone for SharedSet<T> {
    fn clone(&self) -> Self {
        Self::from_set(self.inner.read().clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SharedSet")
            .field("inner", &*self.inner.read())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for SharedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.read(), formatter)
    }
}

// =============================================================================
// Tests
// =============================================================================
