//! Main tokenizer implementation

use std::collections::BTreeSet;
use std::io::Read;
use std::time::Instant;

use crate::api::{Config, Input, Output};
use crate::domain::{RuneClassifier, SubtokenGenerator, Subtokens};
use crate::error::Result;

/// Whitespace-splitting tokenizer producing multi-resolution subtokens
///
/// A tokenizer holds only read-only configuration, so one instance may be
/// shared across threads; every call builds its own per-word scan state.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    classifier: RuneClassifier,
    config: Config,
}

impl Tokenizer {
    /// Create a tokenizer with the embedded default configuration
    pub fn new() -> Self {
        let config = Config::embedded().expect("Embedded config should always be valid");
        Self::with_config(config)
    }

    /// Create a tokenizer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        let classifier = RuneClassifier::new(config.registry.clone());
        Self { classifier, config }
    }

    /// Split `text` on whitespace and collect the subtokens of every word
    ///
    /// When two words produce the same subtoken text, the later word's
    /// metadata wins.
    pub fn tokenize(&self, text: &str) -> Subtokens {
        let generator = self.generator();
        let mut subtokens = Subtokens::new();
        let mut words = 0usize;

        for word in text.split_whitespace() {
            generator.generate_into(word, &mut subtokens);
            words += 1;
        }

        log::debug!(
            "tokenized {} bytes: {} words, {} subtokens",
            text.len(),
            words,
            subtokens.len()
        );
        subtokens
    }

    /// Subtokens of a single word, without whitespace splitting
    pub fn subtokens(&self, word: &str) -> Subtokens {
        self.generator().generate(word)
    }

    /// Distinct subtoken texts of `text`, without metadata
    pub fn subtoken_set(&self, text: &str) -> BTreeSet<String> {
        self.tokenize(text).into_keys().collect()
    }

    /// Tokenize any input source
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.into_text()?;
        let subtokens = self.tokenize(&text);
        Ok(Output::new(subtokens, &text, start.elapsed()))
    }

    /// Tokenize everything a reader yields
    pub fn process_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Output> {
        self.process(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn generator(&self) -> SubtokenGenerator<'_> {
        SubtokenGenerator::new(
            &self.classifier,
            &self.config.depth_policy,
            self.config.annotation,
        )
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
