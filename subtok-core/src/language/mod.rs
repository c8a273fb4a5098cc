//! Tokenizer configuration files
//!
//! A configuration file declares the ordered script registry, the depth
//! policy, and the annotation mode. The default configuration is embedded
//! in the crate.

pub mod config;
pub mod loader;

pub use config::{AnnotationConfig, DepthConfig, OutputConfig, ScriptConfig, TokenizerConfig};
pub use loader::{embedded_default, load_file, DEFAULT_CONFIG_TOML};
