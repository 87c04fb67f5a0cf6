//! Power set and Cartesian product construction.

use std::hash::Hash;

use super::Set;
use crate::pair::OrderedPair;

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns the set of all subsets of `self`, including the empty set and
    /// `self`.
    ///
    /// Built by doubling: starting from `{∅}`, each element `e` turns the
    /// collection `P` into `P ∪ { s ∪ {e} | s ∈ P }`.
    ///
    /// # Complexity
    ///
    /// O(2^n) time and space; a 30-element set has over a billion subsets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::{Set, set};
    ///
    /// let power = set![1, 2].power_set();
    /// assert_eq!(power.cardinality(), 4);
    /// assert!(power.contains(&Set::new()));
    /// assert!(power.contains(&set![1]));
    /// assert!(power.contains(&set![2]));
    /// assert!(power.contains(&set![1, 2]));
    /// ```
    #[must_use]
    pub fn power_set(&self) -> Set<Self> {
        let mut power: Set<Self> = Set::new();
        power.add(Self::new());

        for element in self {
            let augmented: Set<Self> = power
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.add(element.clone());
                    subset
                })
                .collect();
            power = power.union(&augmented);
        }

        tracing::debug!(
            cardinality = self.cardinality(),
            subsets = power.cardinality(),
            "computed power set"
        );
        power
    }

    /// Returns every [`OrderedPair`] `(a, b)` with `a` in `self` and `b` in
    /// `other`.
    ///
    /// The result has exactly `self.cardinality() * other.cardinality()`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::{OrderedPair, set};
    ///
    /// let product = set![1, 2].cartesian_product(&set!["x"]);
    /// assert_eq!(product.cardinality(), 2);
    /// assert!(product.contains(&OrderedPair::new(1, "x")));
    /// assert!(product.contains(&OrderedPair::new(2, "x")));
    /// ```
    #[must_use]
    pub fn cartesian_product<U: Clone + Eq + Hash>(
        &self,
        other: &Set<U>,
    ) -> Set<OrderedPair<T, U>> {
        let mut product = Set::with_capacity(self.cardinality() * other.cardinality());
        for first in self {
            for second in other {
                product.add(OrderedPair::new(first.clone(), second.clone()));
            }
        }
        product
    }
}
