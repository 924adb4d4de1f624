use glossa_core::language::LanguageCode;
use std::fmt;

/// Outcome of resolving a key against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A translation was found and decoded.
    Found {
        text: String,
        /// Table the text came from.
        language: LanguageCode,
        /// Whether the text was served by the fallback language.
        fell_back: bool,
    },
    /// No table had the key.
    Missing { key: String },
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Render as display text: the translation, or `!key!` when missing.
    pub fn into_text(self) -> String {
        match self {
            Self::Found { text, .. } => text,
            Self::Missing { key } => missing_sentinel(&key),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { text, .. } => f.write_str(text),
            Self::Missing { key } => write!(f, "!{key}!"),
        }
    }
}

/// The marker returned for untranslated keys.
pub(crate) fn missing_sentinel(key: &str) -> String {
    format!("!{key}!")
}
