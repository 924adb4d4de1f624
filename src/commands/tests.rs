use super::*;
use glossa_core::{language::TranslationTable, locale::FixedLocale};
use glossa_resources::ExtensionParser;

fn table(entries: &[(&str, &str)]) -> TranslationTable {
    entries.iter().copied().collect()
}

fn test_registry(locale: &str) -> Registry {
    let mut reg = Registry::new(
        Box::new(ExtensionParser::new()),
        Box::new(FixedLocale::new(locale)),
    );
    reg.register_table(
        "en",
        table(&[("hi", "Hello\\nthere"), ("bye", "Bye"), ("quit", "Quit")]),
        false,
    )
    .unwrap();
    reg.register_table("fr", table(&[("hi", "Salut")]), false)
        .unwrap();
    reg.register_table("de", table(&[("hi", "Hallo"), ("bye", "Tschüss"), ("quit", "Beenden")]), false)
        .unwrap();
    reg
}

#[test]
fn test_get_counts_missing() {
    let reg = test_registry("fr-FR");
    let keys = vec!["hi".to_string(), "bye".to_string(), "nope".to_string()];
    let out = get(&reg, &keys);
    assert_eq!(out.lines, vec!["Salut", "Bye", "!nope!"]);
    assert_eq!(out.missing, 1);
}

#[test]
fn test_get_decodes_escapes() {
    let reg = test_registry("en");
    let out = get(&reg, &["hi".to_string()]);
    assert_eq!(out.lines, vec!["Hello\nthere"]);
    assert_eq!(out.missing, 0);
}

#[test]
fn test_languages_listing() {
    let reg = test_registry("en");
    assert_eq!(
        languages(&reg),
        "de  3 strings\nen  3 strings  (fallback)\nfr  1 strings\n"
    );
}

#[test]
fn test_languages_empty() {
    let reg = Registry::new(
        Box::new(ExtensionParser::new()),
        Box::new(FixedLocale::default()),
    );
    assert_eq!(languages(&reg), "no languages registered\n");
}

#[test]
fn test_missing_single_language() {
    let reg = test_registry("en");
    assert_eq!(missing(&reg, Some("fr")), "fr: 2 missing\n  bye\n  quit\n");
}

#[test]
fn test_missing_all_languages() {
    let reg = test_registry("en");
    assert_eq!(
        missing(&reg, None),
        "de: complete\nfr: 2 missing\n  bye\n  quit\n"
    );
}

#[test]
fn test_missing_without_fallback_table() {
    let mut reg = Registry::new(
        Box::new(ExtensionParser::new()),
        Box::new(FixedLocale::default()),
    );
    reg.register_table("fr", table(&[("hi", "Salut")]), false)
        .unwrap();
    assert_eq!(
        missing(&reg, None),
        "fallback language 'en' is not registered\n"
    );
}
