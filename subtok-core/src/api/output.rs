//! Output types for the tokenizer API

use crate::domain::Subtokens;
use std::time::Duration;

/// Tokenization output with processing metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Subtoken text mapped to its metadata
    pub subtokens: Subtokens,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone, Default)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of whitespace-delimited words
    pub word_count: usize,
    /// Number of distinct subtokens
    pub subtoken_count: usize,
}

impl Output {
    /// Wrap a result map with statistics about its source text
    pub(crate) fn new(subtokens: Subtokens, text: &str, duration: Duration) -> Self {
        let metadata = ProcessingMetadata {
            duration,
            bytes_processed: text.len(),
            chars_processed: text.chars().count(),
            word_count: text.split_whitespace().count(),
            subtoken_count: subtokens.len(),
        };

        Self {
            subtokens,
            metadata,
        }
    }
}
