//! # glossa-resources
//!
//! Strings file parsers for glossa. Each parser implements
//! [`glossa_core::traits::ResourceParser`].

pub mod by_extension;
pub mod json_file;
pub mod toml_file;

pub use by_extension::ExtensionParser;
pub use json_file::JsonStrings;
pub use toml_file::TomlStrings;

use glossa_core::error::GlossaError;
use std::path::Path;

/// Read a strings file, mapping I/O failures to a resource error.
pub(crate) fn read_resource(path: &Path) -> Result<String, GlossaError> {
    std::fs::read_to_string(path)
        .map_err(|e| GlossaError::Resource(format!("failed to read {}: {e}", path.display())))
}

/// Join a nested key onto its parent with `.`.
pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
