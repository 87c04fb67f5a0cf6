//! Error types for set operations.
//!
//! Only two operations can fail recoverably: removing an element that is not
//! present, and decoding a set from malformed JSON. Everything else is total
//! over well-typed inputs.

use std::fmt;

/// Represents errors that can occur when working with a [`Set`](crate::Set).
///
/// # Examples
///
/// ```rust
/// use setwise::{Set, SetError};
///
/// let mut set = Set::from_elements([1, 2, 3]);
/// assert_eq!(set.remove(&4), Err(SetError::NotFound));
/// ```
#[derive(Debug)]
pub enum SetError {
    /// The element passed to `remove` is not a member of the set.
    NotFound,
    /// The input could not be decoded as a JSON array of elements.
    #[cfg(feature = "serde")]
    Decode(serde_json::Error),
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "remove: element not found in set"),
            #[cfg(feature = "serde")]
            Self::Decode(error) => write!(formatter, "decode: malformed set JSON: {error}"),
        }
    }
}

impl std::error::Error for SetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            #[cfg(feature = "serde")]
            Self::Decode(error) => Some(error),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for SetError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error)
    }
}

// serde_json::Error has no PartialEq; decode errors compare by category only.
impl PartialEq for SetError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound, Self::NotFound) => true,
            #[cfg(feature = "serde")]
            (Self::Decode(left), Self::Decode(right)) => left.classify() == right.classify(),
            #[cfg(feature = "serde")]
            _ => false,
        }
    }
}
