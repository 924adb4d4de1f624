//! JSON strings files: a single object of `"key": "text"` pairs.
//! Nested objects flatten to dotted keys.

use glossa_core::{error::GlossaError, language::TranslationTable, traits::ResourceParser};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

use crate::{join_key, read_resource};

/// Parser for `.json` strings files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStrings;

impl JsonStrings {
    /// Parse JSON source text into `table`.
    pub fn parse_str(&self, src: &str, table: &mut TranslationTable) -> Result<usize, GlossaError> {
        let root: Value = serde_json::from_str(src)
            .map_err(|e| GlossaError::Resource(format!("invalid JSON strings: {e}")))?;

        let Value::Object(map) = root else {
            return Err(GlossaError::Resource(
                "JSON strings file must be an object".to_string(),
            ));
        };

        let mut count = 0;
        flatten("", &map, table, &mut count);
        Ok(count)
    }
}

impl ResourceParser for JsonStrings {
    fn name(&self) -> &str {
        "json"
    }

    fn parse(&self, path: &Path, table: &mut TranslationTable) -> Result<usize, GlossaError> {
        let src = read_resource(path)?;
        let count = self.parse_str(&src, table)?;
        debug!("json: read {count} strings from {}", path.display());
        Ok(count)
    }
}

fn flatten(prefix: &str, src: &Map<String, Value>, table: &mut TranslationTable, count: &mut usize) {
    for (key, value) in src {
        let full = join_key(prefix, key);
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Object(nested) => {
                flatten(&full, nested, table, count);
                continue;
            }
            Value::Null | Value::Array(_) => {
                warn!("json: skipping non-text value for key '{full}'");
                continue;
            }
        };
        table.insert(full, text);
        *count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object() {
        let mut table = TranslationTable::new();
        let n = JsonStrings
            .parse_str(r#"{"hi": "Hola", "bye": "Adiós"}"#, &mut table)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(table.get("hi"), Some("Hola"));
        assert_eq!(table.get("bye"), Some("Adiós"));
    }

    #[test]
    fn test_nested_objects_flatten() {
        let mut table = TranslationTable::new();
        JsonStrings
            .parse_str(r#"{"menu": {"file": {"open": "Open"}}}"#, &mut table)
            .unwrap();
        assert_eq!(table.get("menu.file.open"), Some("Open"));
    }

    #[test]
    fn test_escaped_backslash_stays_raw() {
        // JSON "\\n" is a backslash and an `n`; decoding happens at lookup.
        let mut table = TranslationTable::new();
        JsonStrings
            .parse_str(r#"{"hi": "Hello\\nWorld"}"#, &mut table)
            .unwrap();
        assert_eq!(table.get("hi"), Some("Hello\\nWorld"));
    }

    #[test]
    fn test_null_and_arrays_skipped() {
        let mut table = TranslationTable::new();
        let n = JsonStrings
            .parse_str(r#"{"a": null, "b": [1], "c": 2}"#, &mut table)
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(table.get("c"), Some("2"));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let mut table = TranslationTable::new();
        let err = JsonStrings.parse_str(r#"["hi"]"#, &mut table).unwrap_err();
        assert!(matches!(err, GlossaError::Resource(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es.json");
        std::fs::write(&path, r#"{"hi": "Hola"}"#).unwrap();
        let mut table = TranslationTable::new();
        assert_eq!(JsonStrings.parse(&path, &mut table).unwrap(), 1);
        assert_eq!(table.get("hi"), Some("Hola"));
    }
}
