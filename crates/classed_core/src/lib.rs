//! Core utilities and types for classed
//!
//! This crate provides foundational data structures and utilities used across
//! the classed ecosystem.

use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod errors;
pub mod serialization;

pub use errors::{ClassedError, Result};

/// An insertion-ordered string-keyed map.
///
/// Style mappings, element mappings and attribute bags all iterate in the
/// order their entries were inserted, so generated components come out in the
/// same order their classes were declared.
pub type OrderedMap<V> = IndexMap<String, V, RandomState>;

/// A value that can appear in a property bag or attribute map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(OrderedMap<Value>),
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }

    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// Implement Display trait instead of inherent to_string method
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(fl) => write!(f, "{fl}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(_) => write!(f, "[List]"),
            Value::Object(_) => write!(f, "[Object]"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_truthy() {
        assert!(!Value::Null.is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Integer(-3).is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(Value::String("card".to_string()).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("x1y2").to_string(), "x1y2");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::List(vec![Value::Null]).to_string(), "[List]");
    }

    #[test]
    fn test_ordered_map_preserves_insertion_order() {
        let mut map: OrderedMap<Value> = OrderedMap::default();
        map.insert("z".to_string(), Value::from("1"));
        map.insert("a".to_string(), Value::from("2"));
        map.insert("m".to_string(), Value::from("3"));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_value_as_str() {
        assert_eq!(Value::from("btn").as_str(), Some("btn"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }
}
