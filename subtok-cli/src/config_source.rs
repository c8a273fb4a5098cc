//! Configuration source management for CLI

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::path::{Path, PathBuf};
use subtok_core::language::embedded_default;
use subtok_core::TokenizerConfig;

/// Where the tokenizer configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Configuration embedded in subtok-core
    Embedded,
    /// External TOML file
    File(PathBuf),
}

impl ConfigSource {
    /// Pick the source for an optional `--config` argument
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => ConfigSource::File(path.to_path_buf()),
            None => ConfigSource::Embedded,
        }
    }

    /// Get the display name for the configuration source
    pub fn display_name(&self) -> String {
        match self {
            ConfigSource::Embedded => "Built-in: Latin, Cyrillic".to_string(),
            ConfigSource::File(path) => format!("External: {}", path.display()),
        }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> CliResult<TokenizerConfig> {
        let config = match self {
            ConfigSource::Embedded => embedded_default()
                .map_err(config_error)
                .context("Embedded configuration")?,
            ConfigSource::File(path) => TokenizerConfig::from_file(path)
                .map_err(config_error)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
        };
        Ok(config)
    }
}

// Any failure while loading, I/O included, is a configuration problem here
fn config_error(error: subtok_core::Error) -> CliError {
    CliError::ConfigError(error.to_string())
}
