//! A locale provider backed by a fixed locale tag.

use crate::traits::LocaleProvider;

/// Locale provider that always reports the tag it was built with.
///
/// Used by the CLI (tag from `--locale` or config) and by tests. Accepts
/// tags such as `"pt-BR"`, `"pt_BR"` or `"pt_BR.UTF-8"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale {
    tag: String,
}

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LocaleProvider for FixedLocale {
    fn language(&self) -> String {
        // Drop the encoding suffix: "pt_BR.UTF-8" -> "pt_BR".
        let tag = self.tag.split('.').next().unwrap_or("");
        tag.trim().to_string()
    }

    fn iso_language(&self) -> String {
        iso_639_1(&self.tag)
    }
}

/// Normalize a locale tag to its lowercase primary language subtag.
pub fn iso_639_1(tag: &str) -> String {
    tag.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_code() {
        let locale = FixedLocale::new("fr");
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.iso_language(), "fr");
    }

    #[test]
    fn test_region_qualified_tag() {
        let locale = FixedLocale::new("pt-BR");
        assert_eq!(locale.language(), "pt-BR");
        assert_eq!(locale.iso_language(), "pt");
    }

    #[test]
    fn test_posix_style_tag() {
        let locale = FixedLocale::new("ja_JP.UTF-8");
        assert_eq!(locale.language(), "ja_JP");
        assert_eq!(locale.iso_language(), "ja");
    }

    #[test]
    fn test_iso_lowercased() {
        assert_eq!(iso_639_1("DE-at"), "de");
        assert_eq!(iso_639_1(""), "");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(FixedLocale::default().iso_language(), "en");
    }
}
