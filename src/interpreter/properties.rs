//! Property extractor - copies a document's plain members.

use super::{EMBEDDED, LINKS};
use serde_json::{Map, Value};

/// Extractor for the non-hypermedia members of a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyExtractor;

impl PropertyExtractor {
    /// Every top-level member except `_links` and `_embedded`, in document
    /// order. Non-object documents have no properties.
    pub fn extract(document: &Value) -> Map<String, Value> {
        let Some(members) = document.as_object() else {
            return Map::new();
        };
        members
            .iter()
            .filter(|(key, _)| key.as_str() != LINKS && key.as_str() != EMBEDDED)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_excludes_hal_sections() {
        let props = PropertyExtractor::extract(&json!({
            "num": 1,
            "_links": {},
            "_embedded": {},
            "nested": {"_links": {"a": 1}}
        }));
        assert_eq!(
            Value::Object(props),
            json!({"num": 1, "nested": {"_links": {"a": 1}}})
        );
    }

    #[test]
    fn test_keeps_document_order() {
        let props = PropertyExtractor::extract(&json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_non_object_document() {
        assert!(PropertyExtractor::extract(&json!([1, 2])).is_empty());
    }
}
