//! Public tokenizer API
//!
//! This module wraps the domain engine behind a configuration builder, an
//! input abstraction, and the `Tokenizer` entry point used by the CLI.

mod config;
mod input;
mod output;
mod tokenizer;


pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata};
pub use tokenizer::Tokenizer;
