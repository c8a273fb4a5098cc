//! Error types for configuration and I/O
//!
//! Tokenization itself is total over its input domain and never fails.
//! Everything that can go wrong happens while building a configuration
//! or while reading input.

use thiserror::Error;

/// Error type for subtok operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Script name not known to the Unicode script tables
    #[error("Unknown script: {0}")]
    UnknownScript(String),

    /// Code point range that is empty or outside the Unicode range
    #[error("Invalid code point range: {start:#x}..={end:#x}")]
    InvalidRange {
        /// First code point of the range
        start: u32,
        /// Last code point of the range
        end: u32,
    },

    /// Malformed TOML configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for subtok operations
pub type Result<T> = std::result::Result<T, Error>;
