//! CSS-module manifest loading
//!
//! CSS-module build tools emit a JSON object mapping logical names to
//! generated class names, sometimes alongside tooling metadata. This module
//! turns that document into a [`StyleMap`]; it never reads the CSS itself.

use crate::StyleMap;
use classed_core::{serialization, ClassedError, Result, Value};
use tracing::debug;

/// Parse a CSS-module JSON manifest into a style mapping.
///
/// Key order and heterogeneous values are preserved as-is; the factory
/// applies its own skip rules when components are built.
pub fn style_map_from_json(input: &str) -> Result<StyleMap> {
    match serialization::from_json(input)? {
        Value::Object(map) => {
            debug!(entries = map.len(), "loaded style manifest");
            Ok(map)
        }
        other => Err(ClassedError::ManifestError(format!(
            "expected a JSON object at the manifest root, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classed_core::Value;

    #[test]
    fn test_parses_object_manifest_in_order() {
        let map =
            style_map_from_json(r#"{"Card": "Card_a", "Title": "Title_b", "Text": "Text_c"}"#)
                .unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, ["Card", "Title", "Text"]);
        assert_eq!(map["Card"], Value::from("Card_a"));
    }

    #[test]
    fn test_keeps_metadata_values() {
        let map = style_map_from_json(r#"{"Card": "Card_a", "__hash": 41}"#).unwrap();
        assert_eq!(map["__hash"], Value::Integer(41));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = style_map_from_json(r#"["Card"]"#).unwrap_err();
        assert!(matches!(err, ClassedError::ManifestError(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = style_map_from_json("{broken").unwrap_err();
        assert!(matches!(err, ClassedError::SerializationError(_)));
    }
}
