//! Build a registry from the loaded configuration.

use glossa_core::{config::Config, locale::FixedLocale};
use glossa_registry::Registry;
use glossa_resources::ExtensionParser;
use std::path::Path;
use tracing::{info, warn};

/// Create the registry and register every configured strings file.
///
/// The locale comes from `locale_override`, then the config, then the
/// fallback language. A resource that fails to register is skipped; the
/// registry logs why.
pub fn build_registry(cfg: &Config, config_path: &str, locale_override: Option<&str>) -> Registry {
    let fallback = cfg.glossa.fallback_language.clone();
    let tag = locale_override
        .map(str::to_string)
        .or_else(|| cfg.glossa.locale.clone())
        .unwrap_or_else(|| fallback.to_string());
    info!("active locale: {tag} (fallback: {fallback})");

    let mut registry = Registry::new(
        Box::new(ExtensionParser::new()),
        Box::new(FixedLocale::new(tag)),
    )
    .with_fallback(fallback);

    let config_path = Path::new(config_path);
    let mut failed = 0;
    for res in &cfg.resources {
        let path = res.resolved_path(config_path);
        if registry
            .register_translations(&res.language, &path, res.merge)
            .is_err()
        {
            failed += 1;
        }
    }
    if failed > 0 {
        warn!("{failed} of {} strings files were not registered", cfg.resources.len());
    }

    registry
}
