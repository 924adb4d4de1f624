//! The localization registry.
//!
//! Lookup order for a key:
//! 1. the table for the locale's exact language (`"pt-BR"`)
//! 2. the table for its ISO 639-1 form (`"pt"`)
//! 3. the fallback language table (`"en"` unless configured)
//!
//! When the key is missing from a table chosen by (1) or (2), the fallback
//! table is tried once more. Anything still missing renders as `!key!`.


use glossa_core::{
    error::GlossaError,
    escape::unescape,
    language::{LanguageCode, TranslationTable},
    traits::{LocaleProvider, ResourceParser},
};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::lookup::{missing_sentinel, Lookup};

/// Per-language translation tables plus the collaborators that fill and
/// select them.
pub struct Registry {
    tables: HashMap<LanguageCode, TranslationTable>,
    parser: Box<dyn ResourceParser>,
    locale: Box<dyn LocaleProvider>,
    fallback: LanguageCode,
}

impl Registry {
    /// Create an empty registry falling back to English.
    pub fn new(parser: Box<dyn ResourceParser>, locale: Box<dyn LocaleProvider>) -> Self {
        Self {
            tables: HashMap::new(),
            parser,
            locale,
            fallback: LanguageCode::english(),
        }
    }

    /// Use `fallback` instead of English as the default language.
    pub fn with_fallback(mut self, fallback: LanguageCode) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback_language(&self) -> &LanguageCode {
        &self.fallback
    }

    /// Replace the locale provider. Takes effect on the next lookup.
    pub fn set_locale(&mut self, locale: Box<dyn LocaleProvider>) {
        self.locale = locale;
    }

    /// Register the strings file at `path` for language `code`.
    ///
    /// With `merge == false` the language's existing entries are discarded
    /// first; with `merge == true` the file's entries are added, replacing
    /// colliding keys. Returns the number of entries read.
    ///
    /// Every failure is logged as a warning and leaves the registry
    /// untouched: empty path, a code that is not two characters, or a file
    /// the parser cannot read.
    pub fn register_translations(
        &mut self,
        code: &str,
        path: impl AsRef<Path>,
        merge: bool,
    ) -> Result<usize, GlossaError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            warn!("register_translations: strings file path is empty");
            return Err(GlossaError::InvalidInput(
                "strings file path is empty".to_string(),
            ));
        }
        let code = validate_code(code)?;

        // Parse into a scratch table so a bad file can't wipe the old one.
        let mut incoming = TranslationTable::new();
        let count = self.parser.parse(path, &mut incoming).map_err(|e| {
            warn!(
                "register_translations: {} parser failed on {}: {e}",
                self.parser.name(),
                path.display()
            );
            e
        })?;

        info!(
            "registered {count} strings for '{code}' from {}",
            path.display()
        );
        self.apply(code, incoming, merge);
        Ok(count)
    }

    /// Register in-memory entries for language `code`, with the same
    /// validation and merge rules as [`Registry::register_translations`].
    pub fn register_table(
        &mut self,
        code: &str,
        entries: TranslationTable,
        merge: bool,
    ) -> Result<usize, GlossaError> {
        let code = validate_code(code)?;
        let count = entries.len();
        debug!("registered {count} in-memory strings for '{code}'");
        self.apply(code, entries, merge);
        Ok(count)
    }

    fn apply(&mut self, code: LanguageCode, incoming: TranslationTable, merge: bool) {
        let table = self.tables.entry(code).or_default();
        if !merge {
            table.clear();
        }
        table.merge(incoming);
    }

    /// Resolve `key` for the current locale.
    pub fn lookup(&self, key: &str) -> Lookup {
        let (primary, fell_back) = self.primary_table();

        if let Some((language, table)) = primary {
            if let Some(raw) = table.get(key) {
                return Lookup::Found {
                    text: unescape(raw),
                    language: language.clone(),
                    fell_back,
                };
            }
            if !fell_back {
                if let Some((language, table)) = self.tables.get_key_value(self.fallback.as_str()) {
                    if let Some(raw) = table.get(key) {
                        return Lookup::Found {
                            text: unescape(raw),
                            language: language.clone(),
                            fell_back: true,
                        };
                    }
                }
            }
        }

        debug!("lookup: no translation for '{key}'");
        Lookup::Missing {
            key: key.to_string(),
        }
    }

    /// The localized string for `key`, or `!key!` when there is none.
    pub fn get_string(&self, key: &str) -> String {
        match self.lookup(key) {
            Lookup::Found { text, .. } => text,
            Lookup::Missing { key } => missing_sentinel(&key),
        }
    }

    /// Pick the table for the current locale. The flag is true when the
    /// fallback language was chosen because nothing else matched.
    fn primary_table(&self) -> (Option<(&LanguageCode, &TranslationTable)>, bool) {
        let language = self.locale.language();
        if let Some(hit) = self.tables.get_key_value(language.as_str()) {
            return (Some(hit), false);
        }
        let iso = self.locale.iso_language();
        if let Some(hit) = self.tables.get_key_value(iso.as_str()) {
            return (Some(hit), false);
        }
        (self.tables.get_key_value(self.fallback.as_str()), true)
    }

    /// Registered languages, sorted.
    pub fn languages(&self) -> Vec<&LanguageCode> {
        let mut codes: Vec<_> = self.tables.keys().collect();
        codes.sort();
        codes
    }

    pub fn table(&self, code: &str) -> Option<&TranslationTable> {
        self.tables.get(code)
    }

    /// Keys present in the fallback table but absent from `code`'s table,
    /// sorted. A language with no table is missing every fallback key.
    pub fn missing_keys(&self, code: &str) -> Vec<&str> {
        let Some(fallback) = self.tables.get(self.fallback.as_str()) else {
            return Vec::new();
        };
        let target = self.tables.get(code);
        let mut keys: Vec<&str> = fallback
            .keys()
            .filter(|k| target.map_or(true, |t| !t.contains_key(k)))
            .collect();
        keys.sort_unstable();
        keys
    }
}

fn validate_code(code: &str) -> Result<LanguageCode, GlossaError> {
    LanguageCode::new(code).map_err(|e| {
        warn!("register_translations: {e}");
        e
    })
}
