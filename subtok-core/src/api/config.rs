//! Configuration API for subtoken extraction

use crate::domain::{
    Annotation, DepthPolicy, LanguageRegistry, ScriptMembership, UnicodeScript,
};
use crate::error::{Error, Result};
use crate::language;
use std::sync::Arc;

/// Tokenizer configuration
///
/// The registry and the depth policy are read-only once built and are
/// shared by every tokenization call.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) registry: Arc<LanguageRegistry>,
    pub(crate) depth_policy: DepthPolicy,
    pub(crate) annotation: Annotation,
}

impl Default for Config {
    /// Empty registry, default depth policy, language annotation
    fn default() -> Self {
        Self {
            registry: Arc::new(LanguageRegistry::new()),
            depth_policy: DepthPolicy::default(),
            annotation: Annotation::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configuration embedded in the crate (Latin, Cyrillic)
    pub fn embedded() -> Result<Self> {
        language::embedded_default()?.to_config()
    }

    /// Registered scripts
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Length-to-depth policy
    pub fn depth_policy(&self) -> &DepthPolicy {
        &self.depth_policy
    }

    /// Metadata attached to each subtoken
    pub fn annotation(&self) -> Annotation {
        self.annotation
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if let DepthPolicy::Fixed(0) = self.depth_policy {
            return Err(Error::Configuration(
                "fixed depth must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    registry: LanguageRegistry,
    depth_policy: Option<DepthPolicy>,
    annotation: Option<Annotation>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Unicode script by name
    pub fn script(mut self, name: impl Into<String>) -> Result<Self> {
        self.registry.register(UnicodeScript::new(name)?);
        Ok(self)
    }

    /// Register a custom membership test
    pub fn register(mut self, script: impl ScriptMembership + 'static) -> Self {
        self.registry.register(script);
        self
    }

    /// Replace the whole registry
    pub fn registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the depth policy
    pub fn depth_policy(mut self, policy: DepthPolicy) -> Self {
        self.depth_policy = Some(policy);
        self
    }

    /// Set the annotation mode
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = Config {
            registry: Arc::new(self.registry),
            depth_policy: self.depth_policy.unwrap_or_default(),
            annotation: self.annotation.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
