//! # setwise
//!
//! A generic, mutable, unordered set with the full vocabulary of set algebra,
//! power sets, Cartesian products and JSON interchange.
//!
//! ## Overview
//!
//! - **[`Set`]**: unique elements of any `T: Eq + Hash`; `add`, `remove`,
//!   `clear`, `pop`, `contains`, `cardinality`, subset/superset relations,
//!   `union`, `intersect`, `difference`, `symmetric_difference`,
//!   `power_set`, `cartesian_product`
//! - **Traversal**: `each` callbacks, a background-produced [`SetIterator`]
//!   that can be stopped early, a streaming channel, and an async stream
//! - **[`OrderedPair`]**: the element type of Cartesian products
//! - **[`Element`]**: a boxed element carrier
//! - **JSON**: sets encode as bare arrays; lenient decoding skips nested
//!   containers and keeps number literals at full precision
//! - **[`SharedSet`]**: a lock-guarded set for concurrent mutation
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON codec and serde impls
//! - `sync` (default): [`SharedSet`]
//! - `async`: `Set::stream`, a tokio-backed [`futures::Stream`]
//! - `fxhash` / `ahash`: alternative storage hasher
//! - `full`: `serde`, `sync` and `async`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut evens = set![2, 4, 6];
//! let small = set![1, 2, 3];
//!
//! assert_eq!(evens.intersect(&small), set![2]);
//! assert_eq!(small.power_set().cardinality(), 8);
//!
//! evens.remove(&4).unwrap();
//! assert_eq!(evens.remove(&4), Err(SetError::NotFound));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{Set, SetIterator};
    pub use crate::element::{Element, Elements};
    pub use crate::error::SetError;
    pub use crate::pair::OrderedPair;
    pub use crate::set;

    #[cfg(feature = "serde")]
    pub use crate::json::Scalar;

    #[cfg(feature = "sync")]
    pub use crate::shared::SharedSet;
}

mod collection;
mod element;
mod error;
mod pair;

#[cfg(feature = "serde")]
mod json;

#[cfg(feature = "sync")]
mod shared;

pub use collection::{DefaultHashBuilder, Set, SetIntoIter, SetIter, SetIterator};
pub use element::{Element, Elements};
pub use error::SetError;
pub use pair::OrderedPair;

#[cfg(feature = "async")]
pub use collection::SetStream;

#[cfg(feature = "serde")]
pub use json::Scalar;

#[cfg(feature = "sync")]
pub use shared::SharedSet;
