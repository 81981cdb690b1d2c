//! Symbol payload attributes.
//!
//! The engine never looks inside a symbol's payload; it only compares
//! names. Front ends attach whatever they need to render a symbol here, for
//! example the `path` of its image file or a display colour.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (pixel sizes, palette indices)
//! - `Bool`: Flags
//! - `Text`: Strings (file paths, captions)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Attribute key holding the source file of a symbol image.
pub const PATH_ATTRIBUTE: &str = "path";

/// Value of a symbol attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

/// Opaque payload of a symbol, keyed by attribute name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(FxHashMap<String, AttributeValue>);

impl Attributes {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_text)
    }

    /// Get an integer attribute with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(AttributeValue::as_int).unwrap_or(default)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(AttributeValue::from(3i32).as_int(), Some(3));
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from("a.png").as_text(), Some("a.png"));
        assert_eq!(AttributeValue::from(3i64).as_text(), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut attrs = Attributes::new();
        assert!(attrs.is_empty());

        attrs.insert(PATH_ATTRIBUTE, "pictures/cat.png");
        attrs.insert("size", 64i32);
        attrs.insert("size", 32i32);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get_text(PATH_ATTRIBUTE), Some("pictures/cat.png"));
        assert_eq!(attrs.get_int("size", 0), 32);
        assert_eq!(attrs.get_int("missing", 7), 7);
    }
}
