//! JSON serialization helpers for [`Value`]

use crate::{Result, Value};

/// Serialize a value to a JSON string.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a value from a JSON string.
///
/// Objects deserialize into [`crate::OrderedMap`], so key order in the input
/// document is preserved.
pub fn from_json(input: &str) -> Result<Value> {
    Ok(serde_json::from_str(input)?)
}
