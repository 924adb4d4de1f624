//! Pick a parser from the file extension.

use glossa_core::{error::GlossaError, language::TranslationTable, traits::ResourceParser};
use std::path::Path;

use crate::{json_file::JsonStrings, toml_file::TomlStrings};

/// Dispatches `.toml` files to [`TomlStrings`] and `.json` files to
/// [`JsonStrings`]. Extensions are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionParser {
    toml: TomlStrings,
    json: JsonStrings,
}

impl ExtensionParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(&self, path: &Path) -> Result<&dyn ResourceParser, GlossaError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(&self.toml),
            "json" => Ok(&self.json),
            _ => Err(GlossaError::Resource(format!(
                "unsupported strings file: {}",
                path.display()
            ))),
        }
    }
}

impl ResourceParser for ExtensionParser {
    fn name(&self) -> &str {
        "by-extension"
    }

    fn parse(&self, path: &Path, table: &mut TranslationTable) -> Result<usize, GlossaError> {
        self.select(path)?.parse(path, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("en.TOML");
        let json_path = dir.path().join("en.json");
        std::fs::write(&toml_path, "a = \"from toml\"\n").unwrap();
        std::fs::write(&json_path, r#"{"b": "from json"}"#).unwrap();

        let parser = ExtensionParser::new();
        let mut table = TranslationTable::new();
        parser.parse(&toml_path, &mut table).unwrap();
        parser.parse(&json_path, &mut table).unwrap();
        assert_eq!(table.get("a"), Some("from toml"));
        assert_eq!(table.get("b"), Some("from json"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let mut table = TranslationTable::new();
        let err = ExtensionParser::new()
            .parse(Path::new("strings.xml"), &mut table)
            .unwrap_err();
        assert!(matches!(err, GlossaError::Resource(_)));
    }
}
