//! Configuration loader
//!
//! Resolves the embedded default configuration and user-supplied files.

use crate::error::{Error, Result};
use crate::language::config::TokenizerConfig;
use std::path::Path;

/// Embedded default configuration (Latin, Cyrillic)
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../configs/default.toml");

/// Parse the embedded default configuration
pub fn embedded_default() -> Result<TokenizerConfig> {
    TokenizerConfig::from_toml_str(DEFAULT_CONFIG_TOML)
}

/// Load and validate a configuration file
pub fn load_file(path: impl AsRef<Path>) -> Result<TokenizerConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Infrastructure(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let config = TokenizerConfig::from_toml_str(&content)?;
    log::debug!(
        "loaded configuration from {} ({} scripts)",
        path.display(),
        config.scripts.len()
    );
    Ok(config)
}

impl TokenizerConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path)
    }
}
