//! Configuration file structures and validation
//!
//! This module defines the TOML schema for tokenizer configuration.

use crate::api::Config;
use crate::domain::{
    Annotation, CharRanges, DepthPolicy, LanguageRegistry, UnicodeScript,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub depth: DepthConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Registered scripts, in registry order
    #[serde(default)]
    pub scripts: Vec<ScriptConfig>,
}

/// Depth policy configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DepthConfig {
    Interpolated {
        max_length: usize,
        max_depth: usize,
        min_length: usize,
        min_depth: usize,
    },
    Unbounded,
    Fixed {
        depth: usize,
    },
}

impl Default for DepthConfig {
    fn default() -> Self {
        DepthConfig::Interpolated {
            max_length: 10,
            max_depth: 10,
            min_length: 18,
            min_depth: 2,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub annotation: AnnotationConfig,
}

/// Metadata attached to each subtoken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationConfig {
    #[default]
    Language,
    Depth,
}

/// One registered script
///
/// With no `ranges` the name is looked up as a Unicode script; otherwise
/// the ranges define a custom table and the name is only a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<[u32; 2]>,
}

impl ScriptConfig {
    /// Reference a Unicode script by name
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranges: Vec::new(),
        }
    }
}

impl DepthConfig {
    /// Build the validated depth policy
    pub fn to_policy(&self) -> Result<DepthPolicy> {
        match *self {
            DepthConfig::Interpolated {
                max_length,
                max_depth,
                min_length,
                min_depth,
            } => DepthPolicy::interpolated(max_length, max_depth, min_length, min_depth),
            DepthConfig::Unbounded => Ok(DepthPolicy::Unbounded),
            DepthConfig::Fixed { depth } => DepthPolicy::fixed(depth),
        }
    }
}

impl From<AnnotationConfig> for Annotation {
    fn from(annotation: AnnotationConfig) -> Self {
        match annotation {
            AnnotationConfig::Language => Annotation::Language,
            AnnotationConfig::Depth => Annotation::Depth,
        }
    }
}

impl TokenizerConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.depth.to_policy()?;

        for script in &self.scripts {
            if script.name.trim().is_empty() {
                return Err(Error::Configuration("script name must not be empty".into()));
            }
        }

        Ok(())
    }

    /// Build the language registry in declaration order
    pub fn to_registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::new();
        for script in &self.scripts {
            if script.ranges.is_empty() {
                registry.register(UnicodeScript::new(script.name.clone())?);
            } else {
                let ranges: Vec<(u32, u32)> =
                    script.ranges.iter().map(|&[start, end]| (start, end)).collect();
                registry.register(CharRanges::new(script.name.clone(), &ranges)?);
            }
        }
        Ok(registry)
    }

    /// Build a validated tokenizer configuration
    pub fn to_config(&self) -> Result<Config> {
        Config::builder()
            .registry(self.to_registry()?)
            .depth_policy(self.depth.to_policy()?)
            .annotation(self.output.annotation.into())
            .build()
    }
}
