//! JSON interchange for [`Set`].
//!
//! A set travels as a bare JSON array, e.g. `[1,2,3]` or `["a","b"]`. No
//! envelope, no type tags and no ordering guarantee.
//!
//! Two decoding modes are provided:
//!
//! - The [`serde::Deserialize`] impl is strict: every array entry must decode
//!   as `T`.
//! - [`Set::from_json`] and [`Set::merge_json`] are lenient: nested arrays and
//!   objects inside the top-level array are skipped silently, and only scalar
//!   entries are decoded.
//!
//! Numbers are parsed with `serde_json`'s `arbitrary_precision`, so a literal
//! such as `123456789012345678901234567890` keeps every digit when decoded
//! into a [`Scalar`].
//!
//! # Examples
//!
//! ```rust
//! use setwise::{Scalar, Set};
//!
//! let set: Set<Scalar> = Set::from_json(r#"[1, "a", true, [2], {"k": 3}]"#).unwrap();
//! assert_eq!(set.cardinality(), 3);
//! assert!(set.contains(&Scalar::from(1)));
//! assert!(set.contains(&Scalar::from("a")));
//! assert!(set.contains(&Scalar::Bool(true)));
//!
//! let numbers = Set::from_elements([1, 2, 3]);
//! let json = numbers.to_json().unwrap();
//! let restored: Set<i64> = Set::from_json(&json).unwrap();
//! assert_eq!(restored, Set::from_elements([1, 2, 3]));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::error::SetError;
use crate::collection::Set;

// =============================================================================
// Scalar
// =============================================================================

/// A dynamically typed JSON scalar, usable as a set element.
///
/// Numbers keep their literal text and compare by it, so `1` and `1.0` are
/// distinct elements while `123456789012345678901234567890` survives a
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, kept at full textual precision.
    Number(Number),
    /// A string.
    String(String),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the number, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the number as `i64`, if it is an integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the number as `u64`, if it is a non-negative integer in range.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the number as `f64`; may lose precision.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(value) => Some(Self::Bool(value)),
            Value::Number(number) => Some(Self::Number(number)),
            Value::String(value) => Some(Self::String(value)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(value) => value.hash(state),
            Self::Number(number) => number.to_string().hash(state),
            Self::String(value) => value.hash(state),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<Number> for Scalar {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(number) => serde::Serialize::serialize(number, serializer),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_value(value).ok_or_else(|| {
            serde::de::Error::custom("expected a JSON scalar, found array or object")
        })
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.cardinality()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// JSON Codec
// =============================================================================

impl<T: serde::Serialize> Set<T> {
    /// Encodes the set as a JSON array, elements in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`] if an element cannot be represented in
    /// JSON (for example a map with non-string keys).
    pub fn to_json(&self) -> Result<String, SetError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned + Eq + Hash> Set<T> {
    /// Decodes a set from a JSON array, skipping nested arrays and objects.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`] if the input is not a JSON array or if a
    /// scalar entry cannot be decoded as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::Set;
    ///
    /// let set: Set<String> = Set::from_json(r#"["a", ["b"], "c", "a"]"#).unwrap();
    /// assert_eq!(set, Set::from_elements(["a".to_string(), "c".to_string()]));
    ///
    /// assert!(Set::<i32>::from_json("{}").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SetError> {
        let mut set = Self::new();
        set.merge_json(json)?;
        Ok(set)
    }

    /// Decodes a JSON array into this set, keeping the existing elements.
    ///
    /// Nested arrays and objects are skipped. Every scalar entry is decoded
    /// before the first insertion, so on error the set is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Set::from_json`].
    pub fn merge_json(&mut self, json: &str) -> Result<(), SetError> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let decoded = values
            .into_iter()
            .filter(|value| !matches!(value, Value::Array(_) | Value::Object(_)))
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        self.reserve(decoded.len());
        self.add_many(decoded);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let set: Set<i32> = Set::new();
        assert_eq!(set.to_json().unwrap(), "[]");
    }

    #[rstest]
    fn test_serialize_single_element() {
        let set = Set::from_elements(["only"]);
        assert_eq!(set.to_json().unwrap(), r#"["only"]"#);
    }

    #[rstest]
    fn test_serialize_multiple_elements() {
        let set = Set::from_elements([3, 1, 2]);
        let mut parsed: Vec<i32> = serde_json::from_str(&set.to_json().unwrap()).unwrap();
        parsed.sort_unstable();
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_deserialize_strict_rejects_nested() {
        let result: Result<Set<i32>, _> = serde_json::from_str("[1, [2]]");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_deserialize_deduplicates() {
        let set: Set<i32> = serde_json::from_str("[1, 1, 2, 2, 3]").unwrap();
        assert_eq!(set.cardinality(), 3);
    }

    #[rstest]
    fn test_from_json_skips_nested_containers() {
        let set: Set<i64> = Set::from_json(r#"[1, [2, 3], {"four": 4}, 5]"#).unwrap();
        assert_eq!(set, Set::from_elements([1, 5]));
    }

    #[rstest]
    fn test_from_json_preserves_large_integers() {
        let literal = "123456789012345678901234567890";
        let set: Set<Scalar> = Set::from_json(&format!("[{literal}]")).unwrap();
        let element = set.iter().next().unwrap();

        assert_eq!(element.to_string(), literal);
        assert_eq!(set.to_json().unwrap(), format!("[{literal}]"));
    }

    #[rstest]
    fn test_from_json_distinguishes_number_literals() {
        let set: Set<Scalar> = Set::from_json("[1, 1.0, 1]").unwrap();
        assert_eq!(set.cardinality(), 2);
    }

    #[rstest]
    fn test_from_json_mixed_scalars() {
        let set: Set<Scalar> = Set::from_json(r#"[null, false, 0, "0"]"#).unwrap();
        assert_eq!(set.cardinality(), 4);
        assert!(set.contains(&Scalar::Null));
        assert!(set.contains(&Scalar::Bool(false)));
        assert!(set.contains(&Scalar::from(0)));
        assert!(set.contains(&Scalar::from("0")));
    }

    #[rstest]
    #[case("")]
    #[case("[1,")]
    #[case("{\"a\": 1}")]
    #[case("42")]
    fn test_from_json_malformed_input(#[case] json: &str) {
        let result: Result<Set<Scalar>, SetError> = Set::from_json(json);
        assert!(matches!(result, Err(SetError::Decode(_))));
    }

    #[rstest]
    fn test_from_json_type_mismatch_is_decode_error() {
        let result: Result<Set<i32>, SetError> = Set::from_json(r#"[1, "two"]"#);
        assert!(matches!(result, Err(SetError::Decode(_))));
    }

    #[rstest]
    fn test_merge_json_keeps_existing_elements() {
        let mut set = Set::from_elements(["a".to_string()]);
        set.merge_json(r#"["b", "a"]"#).unwrap();
        assert_eq!(set.cardinality(), 2);
    }

    #[rstest]
    fn test_failed_merge_leaves_set_unchanged() {
        let mut set = Set::from_elements([10]);
        let result = set.merge_json(r#"[1, 2, "three"]"#);

        assert!(matches!(result, Err(SetError::Decode(_))));
        assert_eq!(set, Set::from_elements([10]));
    }

    #[rstest]
    fn test_scalar_accessors() {
        assert_eq!(Scalar::from(7).as_i64(), Some(7));
        assert_eq!(Scalar::from(7_u64).as_u64(), Some(7));
        assert_eq!(Scalar::from("s").as_str(), Some("s"));
        assert_eq!(Scalar::from(true).as_bool(), Some(true));
        assert!(Scalar::Null.is_null());
        assert_eq!(Scalar::from("s").as_i64(), None);
    }

    #[rstest]
    fn test_scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::from("text").to_string(), "text");
        assert_eq!(Scalar::from(-3).to_string(), "-3");
    }
}
