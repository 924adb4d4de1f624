//! CLI command bodies. Each returns the text to print so it can be tested
//! without capturing stdout.

#[cfg(test)]
mod tests;

use glossa_registry::{Lookup, Registry};
use std::fmt::Write;

/// Output of `glossa get`.
pub struct GetOutput {
    pub lines: Vec<String>,
    /// How many keys rendered as the missing sentinel.
    pub missing: usize,
}

/// Resolve each key; untranslated keys print as `!key!`.
pub fn get(registry: &Registry, keys: &[String]) -> GetOutput {
    let mut missing = 0;
    let lines = keys
        .iter()
        .map(|key| {
            let lookup = registry.lookup(key);
            if matches!(lookup, Lookup::Missing { .. }) {
                missing += 1;
            }
            lookup.into_text()
        })
        .collect();
    GetOutput { lines, missing }
}

/// One line per registered language: code, entry count, fallback marker.
pub fn languages(registry: &Registry) -> String {
    let codes = registry.languages();
    if codes.is_empty() {
        return "no languages registered\n".to_string();
    }
    let fallback = registry.fallback_language();
    let mut out = String::new();
    for code in codes {
        let count = registry.table(code.as_str()).map_or(0, |t| t.len());
        let marker = if code == fallback { "  (fallback)" } else { "" };
        let _ = writeln!(out, "{code}  {count} strings{marker}");
    }
    out
}

/// Fallback-language keys missing from `language`, or from every
/// registered language when `language` is `None`.
pub fn missing(registry: &Registry, language: Option<&str>) -> String {
    let fallback = registry.fallback_language();
    if registry.table(fallback.as_str()).is_none() {
        return format!("fallback language '{fallback}' is not registered\n");
    }

    let targets: Vec<String> = match language {
        Some(code) => vec![code.to_string()],
        None => registry
            .languages()
            .into_iter()
            .filter(|code| *code != fallback)
            .map(|code| code.to_string())
            .collect(),
    };

    let mut out = String::new();
    for code in targets {
        let keys = registry.missing_keys(&code);
        if keys.is_empty() {
            let _ = writeln!(out, "{code}: complete");
            continue;
        }
        let _ = writeln!(out, "{code}: {} missing", keys.len());
        for key in keys {
            let _ = writeln!(out, "  {key}");
        }
    }
    out
}
