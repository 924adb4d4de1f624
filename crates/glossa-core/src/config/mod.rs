mod defaults;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GlossaError;
use crate::language::LanguageCode;
use defaults::*;

/// Top-level glossa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub glossa: GlossaConfig,
    /// Strings files to register at startup, in order.
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Language consulted when the active locale has no table or no entry.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: LanguageCode,
    /// Active locale tag (e.g. "fr-FR"). `None` = use the fallback language.
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for GlossaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            fallback_language: default_fallback_language(),
            locale: None,
        }
    }
}

/// One strings file to register.
///
/// `language` stays a plain string here so a bad code is reported by the
/// registry at registration time instead of failing the whole config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub language: String,
    pub path: String,
    /// Merge into an existing table instead of replacing it.
    #[serde(default)]
    pub merge: bool,
}

impl ResourceConfig {
    /// Resolve `path` against the directory holding the config file.
    ///
    /// `~/` is expanded; absolute paths are returned unchanged. An empty
    /// path stays empty so the registry can reject it.
    pub fn resolved_path(&self, config_path: &Path) -> PathBuf {
        if self.path.is_empty() {
            return PathBuf::new();
        }
        let expanded = PathBuf::from(shellexpand(&self.path));
        if expanded.is_absolute() {
            return expanded;
        }
        match config_path.parent() {
            Some(dir) => dir.join(expanded),
            None => expanded,
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, GlossaError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GlossaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| GlossaError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
