//! Ordered key/value metadata bags
//!
//! Metadata travels next to an outcome (aggregated at the outcome level) and
//! independently on each [`Reason`](crate::Reason). Keys keep their first
//! insertion position; writing an existing key replaces its value.
//!
//! ```
//! use wellspring::{Metadata, MetadataValue};
//!
//! let meta = Metadata::new()
//!     .with("source", "cache")
//!     .with("hits", 3)
//!     .with("source", "db");
//!
//! assert_eq!(meta.len(), 2);
//! assert_eq!(meta.get("source"), Some(&MetadataValue::from("db")));
//! let keys: Vec<_> = meta.keys().collect();
//! assert_eq!(keys, vec!["source", "hits"]);
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// Text
    String(String),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Bool(bool),
}

impl MetadataValue {
    /// Borrow the value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => f.write_str(s),
            MetadataValue::Int(i) => write!(f, "{}", i),
            MetadataValue::Float(x) => write!(f, "{}", x),
            MetadataValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),+) => {
        $(
            impl From<$int> for MetadataValue {
                fn from(value: $int) -> Self {
                    MetadataValue::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Insertion-ordered metadata bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: IndexMap<String, MetadataValue>,
}

impl Metadata {
    /// Create an empty bag.
    pub fn new() -> Self {
        Metadata {
            entries: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Copy every entry of `other` into this bag; `other` wins on collisions.
    pub fn merge(&mut self, other: &Metadata) {
        for (key, value) in other.iter() {
            self.entries.insert(key.to_string(), value.clone());
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = Metadata::new();
        for (key, value) in iter {
            meta.insert(key, value);
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut meta = Metadata::new();
        meta.insert("a", 1);
        meta.insert("b", 2);
        let replaced = meta.insert("a", 3);

        assert_eq!(replaced, Some(MetadataValue::Int(1)));
        let entries: Vec<_> = meta.iter().collect();
        assert_eq!(
            entries,
            vec![("a", &MetadataValue::Int(3)), ("b", &MetadataValue::Int(2))]
        );
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = Metadata::new().with("shared", "base").with("only_base", true);
        let other = Metadata::new().with("shared", "other").with("only_other", 1.5);
        base.merge(&other);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("shared").and_then(|v| v.as_str()), Some("other"));
        assert_eq!(base.get("only_other"), Some(&MetadataValue::Float(1.5)));
    }

    #[test]
    fn test_from_iterator() {
        let meta: Metadata = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(meta.get("y").and_then(MetadataValue::as_int), Some(2));
        assert!(meta.contains_key("x"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(MetadataValue::from("text").to_string(), "text");
        assert_eq!(MetadataValue::from(7_u32).to_string(), "7");
        assert_eq!(MetadataValue::from(false).to_string(), "false");
    }
}
