//! Multi-resolution subtoken extraction
//!
//! This crate extracts, from arbitrary text, every contiguous run of a
//! whitespace-delimited word that spans a bounded number of internal
//! boundaries: script changes, letter to digit, letter to punctuation and
//! so on. Each subtoken is annotated either with its window depth or with
//! the dominant language and "base" span inferred from its segments, so
//! search indexers and fuzzy matchers can weight partial matches.
//!
//! # Architecture
//!
//! - **Domain layer**: character classification, boundary tracking, the
//!   circular boundary window, depth policies and language detection
//! - **Language layer**: TOML configuration of the script registry
//! - **API layer**: `Config`, `Input`, `Output` and the `Tokenizer`
//!
//! # Example
//!
//! ```rust
//! use subtok_core::Tokenizer;
//!
//! // Latin = 0, Cyrillic = 1
//! let tokenizer = Tokenizer::new();
//!
//! let subtokens = tokenizer.tokenize("hello123 world");
//! assert_eq!(subtokens.len(), 4);
//! assert_eq!(subtokens["hello123"].language(), Some(0));
//! assert_eq!(subtokens["123"].language(), None);
//! ```

pub mod api;
pub mod circular_window;
pub mod domain;
pub mod error;
pub mod language;

pub use api::{Config, ConfigBuilder, Input, Output, ProcessingMetadata, Tokenizer};
pub use circular_window::CircularWindow;
pub use domain::*;
pub use error::{Error, Result};
pub use language::TokenizerConfig;
