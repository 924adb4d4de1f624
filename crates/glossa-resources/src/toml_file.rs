//! TOML strings files.
//!
//! Entries are `key = "text"` pairs, either at the top level or under a
//! `[strings]` table. Nested tables flatten to dotted keys:
//!
//! ```toml
//! [strings]
//! greeting = "Hello\\nWorld"
//!
//! [strings.menu]
//! quit = "Quit"   # registered as "menu.quit"
//! ```

use glossa_core::{error::GlossaError, language::TranslationTable, traits::ResourceParser};
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, warn};

use crate::{join_key, read_resource};

/// Parser for `.toml` strings files.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlStrings;

impl TomlStrings {
    /// Parse TOML source text into `table`.
    pub fn parse_str(&self, src: &str, table: &mut TranslationTable) -> Result<usize, GlossaError> {
        let root: Table = toml::from_str(src)
            .map_err(|e| GlossaError::Resource(format!("invalid TOML strings: {e}")))?;

        let strings = match root.get("strings") {
            Some(Value::Table(t)) => t,
            _ => &root,
        };

        let mut count = 0;
        flatten("", strings, table, &mut count);
        Ok(count)
    }
}

impl ResourceParser for TomlStrings {
    fn name(&self) -> &str {
        "toml"
    }

    fn parse(&self, path: &Path, table: &mut TranslationTable) -> Result<usize, GlossaError> {
        let src = read_resource(path)?;
        let count = self.parse_str(&src, table)?;
        debug!("toml: read {count} strings from {}", path.display());
        Ok(count)
    }
}

fn flatten(prefix: &str, src: &Table, table: &mut TranslationTable, count: &mut usize) {
    for (key, value) in src {
        let full = join_key(prefix, key);
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Table(nested) => {
                flatten(&full, nested, table, count);
                continue;
            }
            Value::Array(_) | Value::Datetime(_) => {
                warn!("toml: skipping non-text value for key '{full}'");
                continue;
            }
        };
        table.insert(full, text);
        *count += 1;
    }
}
